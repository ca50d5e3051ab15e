//! Parses typed command lines into controller actions.

use shared::{
    domain::{EditableField, MemberId},
    error::ControllerError,
    protocol::ControllerAction,
};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  search [term]                 filter rows; the term is taken verbatim after
                                one space (empty term shows everything)
  select <id>                   toggle selection of a row
  edit <id>                     start editing a row
  set <id> <name|email|role> [value]
                                change a field of a row being edited
  save <id>                     commit a row's edits
  cancel <id>                   discard a row's edits
  delete <id>                   delete one row
  delete-selected               delete every selected row
  page <n> | first | prev | next | last
  show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Action(ControllerAction),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("'{0}' is not a member id")]
    InvalidId(String),
    #[error("'{0}' is not a page number")]
    InvalidPageNumber(String),
    #[error(transparent)]
    Field(#[from] ControllerError),
}

/// Returns `Ok(None)` for blank lines.
pub fn parse_input(line: &str) -> Result<Option<Input>, InputError> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }
    let (command, raw_rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = raw_rest.trim();

    let input = match command.to_ascii_lowercase().as_str() {
        // Search terms keep their surrounding whitespace.
        "search" | "find" => Input::Action(ControllerAction::Search {
            term: raw_rest.to_string(),
        }),
        "select" | "toggle" => Input::Action(ControllerAction::ToggleSelect {
            id: parse_id("select", rest)?,
        }),
        "edit" => Input::Action(ControllerAction::BeginEdit {
            id: parse_id("edit", rest)?,
        }),
        "set" => {
            let (id, rest) = split_word(rest);
            let id = parse_id("set", id)?;
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(InputError::MissingArgument {
                    command: "set",
                    argument: "a field name",
                });
            }
            Input::Action(ControllerAction::SetField {
                id,
                field: field.parse::<EditableField>()?,
                value: value.to_string(),
            })
        }
        "save" => Input::Action(ControllerAction::Save {
            id: parse_id("save", rest)?,
        }),
        "cancel" => Input::Action(ControllerAction::CancelEdit {
            id: parse_id("cancel", rest)?,
        }),
        "delete" => Input::Action(ControllerAction::DeleteRow {
            id: parse_id("delete", rest)?,
        }),
        "delete-selected" => Input::Action(ControllerAction::DeleteSelected),
        "page" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument {
                    command: "page",
                    argument: "a page number",
                });
            }
            let page = rest
                .parse::<usize>()
                .map_err(|_| InputError::InvalidPageNumber(rest.to_string()))?;
            Input::Action(ControllerAction::GotoPage { page })
        }
        "first" => Input::Action(ControllerAction::FirstPage),
        "prev" => Input::Action(ControllerAction::PrevPage),
        "next" => Input::Action(ControllerAction::NextPage),
        "last" => Input::Action(ControllerAction::LastPage),
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        _ => return Err(InputError::UnknownCommand(command.to_string())),
    };
    Ok(Some(input))
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (text, ""),
    }
}

fn parse_id(command: &'static str, raw: &str) -> Result<MemberId, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::MissingArgument {
            command,
            argument: "a member id",
        });
    }
    raw.parse::<MemberId>()
        .map_err(|_| InputError::InvalidId(raw.to_string()))
}

#[cfg(test)]
#[path = "../tests/input_tests.rs"]
mod tests;
