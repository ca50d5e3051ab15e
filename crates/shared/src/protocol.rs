use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{EditableField, Member, MemberId, MemberPatch},
    error::ErrorReport,
};

/// Every user action a renderer can send to the record-set controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ControllerAction {
    Search {
        term: String,
    },
    ToggleSelect {
        id: MemberId,
    },
    BeginEdit {
        id: MemberId,
    },
    SetField {
        id: MemberId,
        field: EditableField,
        value: String,
    },
    Save {
        id: MemberId,
    },
    CancelEdit {
        id: MemberId,
    },
    DeleteRow {
        id: MemberId,
    },
    DeleteSelected,
    GotoPage {
        page: usize,
    },
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
}

impl ControllerAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::ToggleSelect { .. } => "toggle_select",
            Self::BeginEdit { .. } => "begin_edit",
            Self::SetField { .. } => "set_field",
            Self::Save { .. } => "save",
            Self::CancelEdit { .. } => "cancel_edit",
            Self::DeleteRow { .. } => "delete_row",
            Self::DeleteSelected => "delete_selected",
            Self::GotoPage { .. } => "goto_page",
            Self::FirstPage => "first_page",
            Self::PrevPage => "prev_page",
            Self::NextPage => "next_page",
            Self::LastPage => "last_page",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRow {
    pub member: Member,
    pub selected: bool,
    pub editing: bool,
}

/// Snapshot handed to a renderer after every action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSetView {
    pub search_term: String,
    pub visible_rows: Vec<MemberRow>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<usize>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub selected_ids: BTreeSet<MemberId>,
    pub editing_state: BTreeMap<MemberId, MemberPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<ErrorReport>,
}

impl RecordSetView {
    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}
