use std::collections::BTreeSet;

use shared::{
    domain::{EditableField, Member, MemberId},
    error::{ControllerError, ErrorReport},
    protocol::{ControllerAction, MemberRow, RecordSetView},
};
use tracing::{debug, info, warn};

use crate::{
    edit_buffer::EditBuffer, filter, pagination, selection::SelectionSet, store::RecordStore,
};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Owns the member list and every piece of UI state derived from or keyed
/// into it. Filtered and paged views are recomputed on read, never cached.
#[derive(Debug, Clone)]
pub struct RecordSetController {
    store: RecordStore,
    search_term: String,
    current_page: usize,
    page_size: usize,
    edits: EditBuffer,
    selection: SelectionSet,
    load_error: Option<ControllerError>,
    last_error: Option<ControllerError>,
}

impl Default for RecordSetController {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSetController {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            store: RecordStore::new(),
            search_term: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            edits: EditBuffer::new(),
            selection: SelectionSet::new(),
            load_error: None,
            last_error: None,
        }
    }

    /// Replaces the store with a freshly fetched list and resets every piece
    /// of state keyed into the old one.
    pub fn load(&mut self, members: Vec<Member>) {
        let duplicates = self.store.load(members);
        for id in &duplicates {
            warn!(member_id = id.0, "dropping member with duplicate id");
        }
        self.selection.clear();
        self.edits.clear();
        self.current_page = 1;
        self.load_error = None;
        info!(members = self.store.len(), "member list loaded");
    }

    /// Records a failed fetch. The store is left as it was (empty at startup).
    pub fn load_failed(&mut self, reason: impl Into<String>) -> &ControllerError {
        let err = ControllerError::FetchFailed(reason.into());
        warn!(error = %err, "member list unavailable; rendering empty table");
        self.load_error.insert(err)
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
        debug!(term = %self.search_term, "search term changed");
    }

    pub fn filtered(&self) -> Vec<&Member> {
        filter::filter_members(self.store.members(), &self.search_term)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered().len(), self.page_size)
    }

    pub fn visible_rows(&self) -> Vec<&Member> {
        let filtered = self.filtered();
        pagination::page_slice(&filtered, self.current_page, self.page_size).to_vec()
    }

    pub fn goto_page(&mut self, page: usize) -> Result<(), ControllerError> {
        let total_pages = self.total_pages();
        if !pagination::is_valid_page(page, total_pages) {
            return Err(ControllerError::InvalidPage {
                requested: page,
                total_pages,
            });
        }
        self.current_page = page;
        Ok(())
    }

    pub fn first_page(&mut self) -> Result<(), ControllerError> {
        self.step_to(1)
    }

    pub fn prev_page(&mut self) -> Result<(), ControllerError> {
        self.step_to(self.current_page.saturating_sub(1))
    }

    pub fn next_page(&mut self) -> Result<(), ControllerError> {
        self.step_to(self.current_page + 1)
    }

    pub fn last_page(&mut self) -> Result<(), ControllerError> {
        self.step_to(self.total_pages())
    }

    // The pager buttons are disabled on the page they would lead to.
    fn step_to(&mut self, page: usize) -> Result<(), ControllerError> {
        if page == self.current_page {
            return Err(ControllerError::InvalidPage {
                requested: page,
                total_pages: self.total_pages(),
            });
        }
        self.goto_page(page)
    }

    pub fn toggle_select(&mut self, id: MemberId) -> Result<bool, ControllerError> {
        self.require(id)?;
        Ok(self.selection.toggle(id))
    }

    /// Deletes every member in `ids` and drops their selection and edit
    /// state. Unknown ids are ignored. Returns how many members were removed.
    pub fn delete_where(&mut self, ids: &BTreeSet<MemberId>) -> usize {
        let removed = self.store.delete_where(ids);
        self.selection.remove_all(ids);
        self.edits.forget(&removed);
        self.reclamp_page();
        if !removed.is_empty() {
            info!(removed = removed.len(), remaining = self.store.len(), "members deleted");
        }
        removed.len()
    }

    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let ids = self.selection.ids().clone();
        let removed = self.delete_where(&ids);
        self.selection.clear();
        removed
    }

    pub fn delete_row(&mut self, id: MemberId) -> Result<(), ControllerError> {
        self.require(id)?;
        self.delete_where(&BTreeSet::from([id]));
        Ok(())
    }

    pub fn begin_edit(&mut self, id: MemberId) -> Result<(), ControllerError> {
        self.require(id)?;
        if self.edits.begin(id) {
            debug!(member_id = id.0, "editing member");
        }
        Ok(())
    }

    pub fn set_field(
        &mut self,
        id: MemberId,
        field: EditableField,
        value: impl Into<String>,
    ) -> Result<(), ControllerError> {
        self.require_editing(id)?;
        self.edits.set_field(id, field, value);
        Ok(())
    }

    /// Merges the drafted fields into the stored member and leaves edit mode.
    /// The saved member may drop out of the active search, so the page is
    /// clamped afterwards.
    pub fn save(&mut self, id: MemberId) -> Result<Member, ControllerError> {
        self.require_editing(id)?;
        let patch = self.edits.take(id);
        let updated = self.store.replace_fields(id, &patch)?;
        self.reclamp_page();
        info!(member_id = id.0, "member saved");
        Ok(updated)
    }

    pub fn cancel_edit(&mut self, id: MemberId) -> Result<(), ControllerError> {
        self.require(id)?;
        if self.edits.discard(id) {
            debug!(member_id = id.0, "edit discarded");
        }
        Ok(())
    }

    /// Applies one renderer action. Failures never escape: they are logged,
    /// kept as `last_error`, and leave state untouched.
    pub fn dispatch(&mut self, action: ControllerAction) -> bool {
        let name = action.name();
        let result = match action {
            ControllerAction::Search { term } => {
                self.search(term);
                Ok(())
            }
            ControllerAction::ToggleSelect { id } => self.toggle_select(id).map(|_| ()),
            ControllerAction::BeginEdit { id } => self.begin_edit(id),
            ControllerAction::SetField { id, field, value } => self.set_field(id, field, value),
            ControllerAction::Save { id } => self.save(id).map(|_| ()),
            ControllerAction::CancelEdit { id } => self.cancel_edit(id),
            ControllerAction::DeleteRow { id } => self.delete_row(id),
            ControllerAction::DeleteSelected => {
                self.delete_selected();
                Ok(())
            }
            ControllerAction::GotoPage { page } => self.goto_page(page),
            ControllerAction::FirstPage => self.first_page(),
            ControllerAction::PrevPage => self.prev_page(),
            ControllerAction::NextPage => self.next_page(),
            ControllerAction::LastPage => self.last_page(),
        };

        match result {
            Ok(()) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                warn!(action = name, error = %err, "action ignored");
                self.last_error = Some(err);
                false
            }
        }
    }

    pub fn view(&self) -> RecordSetView {
        let filtered = self.filtered();
        let total_pages = pagination::total_pages(filtered.len(), self.page_size);
        let visible_rows = pagination::page_slice(&filtered, self.current_page, self.page_size)
            .iter()
            .map(|member| MemberRow {
                member: (*member).clone(),
                selected: self.selection.contains(member.id),
                editing: self.edits.is_editing(member.id),
            })
            .collect();

        RecordSetView {
            search_term: self.search_term.clone(),
            visible_rows,
            current_page: self.current_page,
            total_pages,
            page_numbers: pagination::page_numbers(total_pages),
            filtered_count: filtered.len(),
            total_count: self.store.len(),
            selected_ids: self.selection.ids().clone(),
            editing_state: self.edits.snapshot(),
            last_error: self
                .last_error
                .as_ref()
                .or(self.load_error.as_ref())
                .map(ErrorReport::from),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn edits(&self) -> &EditBuffer {
        &self.edits
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn load_error(&self) -> Option<&ControllerError> {
        self.load_error.as_ref()
    }

    pub fn last_error(&self) -> Option<&ControllerError> {
        self.last_error.as_ref()
    }

    fn require(&self, id: MemberId) -> Result<(), ControllerError> {
        if self.store.contains(id) {
            Ok(())
        } else {
            Err(ControllerError::NotFound(id))
        }
    }

    fn require_editing(&self, id: MemberId) -> Result<(), ControllerError> {
        self.require(id)?;
        if self.edits.is_editing(id) {
            Ok(())
        } else {
            Err(ControllerError::NotEditing(id))
        }
    }

    fn reclamp_page(&mut self) {
        let clamped = pagination::clamp_page(self.current_page, self.total_pages());
        if clamped != self.current_page {
            debug!(from = self.current_page, to = clamped, "page clamped after mutation");
            self.current_page = clamped;
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
