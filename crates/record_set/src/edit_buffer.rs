use std::collections::{BTreeMap, BTreeSet};

use shared::domain::{EditableField, MemberId, MemberPatch};

/// Rows in edit mode plus their uncommitted field drafts.
///
/// A row can be editing with no draft yet: drafts are created on the first
/// `set_field`, not on `begin`.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    editing: BTreeSet<MemberId>,
    drafts: BTreeMap<MemberId, MemberPatch>,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the row was already editing.
    pub fn begin(&mut self, id: MemberId) -> bool {
        self.editing.insert(id)
    }

    pub fn set_field(&mut self, id: MemberId, field: EditableField, value: impl Into<String>) {
        self.drafts.entry(id).or_default().set(field, value);
    }

    /// Ends edit mode and hands back whatever was drafted.
    pub fn take(&mut self, id: MemberId) -> MemberPatch {
        self.editing.remove(&id);
        self.drafts.remove(&id).unwrap_or_default()
    }

    /// Ends edit mode and drops the draft. Returns whether the row was editing.
    pub fn discard(&mut self, id: MemberId) -> bool {
        self.drafts.remove(&id);
        self.editing.remove(&id)
    }

    pub fn forget<'a>(&mut self, ids: impl IntoIterator<Item = &'a MemberId>) {
        for id in ids {
            self.discard(*id);
        }
    }

    pub fn clear(&mut self) {
        self.editing.clear();
        self.drafts.clear();
    }

    pub fn is_editing(&self, id: MemberId) -> bool {
        self.editing.contains(&id)
    }

    pub fn draft(&self, id: MemberId) -> Option<&MemberPatch> {
        self.drafts.get(&id)
    }

    /// Every editing row with its draft (empty when nothing was typed yet).
    pub fn snapshot(&self) -> BTreeMap<MemberId, MemberPatch> {
        self.editing
            .iter()
            .map(|id| (*id, self.drafts.get(id).cloned().unwrap_or_default()))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/edit_buffer_tests.rs"]
mod tests;
