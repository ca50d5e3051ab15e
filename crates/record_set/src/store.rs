use std::collections::{BTreeSet, HashSet};

use shared::{
    domain::{Member, MemberId, MemberPatch},
    error::ControllerError,
};

/// Authoritative, ordered member list. Ids are unique at all times.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    members: Vec<Member>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole store. Returns the ids dropped as duplicates; the
    /// first occurrence of an id wins.
    pub fn load(&mut self, members: Vec<Member>) -> Vec<MemberId> {
        let mut seen = HashSet::with_capacity(members.len());
        let mut duplicates = Vec::new();
        self.members = members
            .into_iter()
            .filter(|member| {
                if seen.insert(member.id) {
                    true
                } else {
                    duplicates.push(member.id);
                    false
                }
            })
            .collect();
        duplicates
    }

    /// Removes every member whose id is in `ids` and returns the ids that
    /// were actually present.
    pub fn delete_where(&mut self, ids: &BTreeSet<MemberId>) -> Vec<MemberId> {
        if ids.is_empty() {
            return Vec::new();
        }
        let mut removed = Vec::new();
        self.members.retain(|member| {
            if ids.contains(&member.id) {
                removed.push(member.id);
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn replace_fields(
        &mut self,
        id: MemberId,
        patch: &MemberPatch,
    ) -> Result<Member, ControllerError> {
        let slot = self
            .members
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or(ControllerError::NotFound(id))?;
        let replacement = patch.apply_to(slot);
        *slot = replacement.clone();
        Ok(replacement)
    }

    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.get(id).is_some()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
