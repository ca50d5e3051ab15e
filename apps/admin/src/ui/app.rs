use crossbeam_channel::Receiver;
use record_set::RecordSetController;

use crate::controller::{
    events::{classify_fetch_failure, UiEvent},
    input::{parse_input, Input, HELP},
};
use crate::ui::table::render_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// UI-thread state: the record-set controller plus a one-line status.
pub struct AdminApp {
    controller: RecordSetController,
    status: String,
    loaded: bool,
}

impl AdminApp {
    pub fn new(page_size: usize) -> Self {
        Self {
            controller: RecordSetController::with_page_size(page_size),
            status: "Loading members...".to_string(),
            loaded: false,
        }
    }

    pub fn handle_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::MembersLoaded { origin, members } => {
                let count = members.len();
                self.controller.load(members);
                self.status = format!("Loaded {count} members from {origin}");
                self.loaded = true;
            }
            UiEvent::Error(error) => {
                tracing::error!(context = ?error.context(), "{}", error.message());
                self.status = classify_fetch_failure(&error);
                self.controller.load_failed(error.message());
                self.loaded = true;
            }
        }
    }

    /// Blocks until the startup fetch resolves or the backend goes away.
    pub fn wait_for_members(&mut self, ui_rx: &Receiver<UiEvent>) {
        while !self.loaded {
            match ui_rx.recv() {
                Ok(event) => self.handle_ui_event(event),
                Err(_) => {
                    self.controller
                        .load_failed("backend worker exited before delivering members");
                    self.status = "Backend worker exited; showing an empty table".to_string();
                    self.loaded = true;
                }
            }
        }
    }

    pub fn handle_line(&mut self, line: &str) -> LoopControl {
        match parse_input(line) {
            Ok(None) => {}
            Ok(Some(Input::Action(action))) => {
                self.status.clear();
                self.controller.dispatch(action);
            }
            Ok(Some(Input::Show)) => self.status.clear(),
            Ok(Some(Input::Help)) => self.status = HELP.to_string(),
            Ok(Some(Input::Quit)) => return LoopControl::Quit,
            Err(err) => {
                tracing::debug!(%line, "rejected input: {err}");
                self.status = err.to_string();
            }
        }
        LoopControl::Continue
    }

    pub fn render(&self) -> String {
        let mut out = render_view(&self.controller.view());
        if !self.status.is_empty() {
            out.push_str(&self.status);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
