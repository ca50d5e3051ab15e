//! Search filtering. A member matches when any of its fields, rendered as
//! text, contains the search term case-insensitively.

use shared::domain::Member;

fn matches_lowercase(member: &Member, needle: &str) -> bool {
    member
        .searchable_values()
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
}

/// Ordered subsequence of `members` matching `term`.
pub fn filter_members<'a>(members: &'a [Member], term: &str) -> Vec<&'a Member> {
    if term.is_empty() {
        return members.iter().collect();
    }
    let needle = term.to_lowercase();
    members
        .iter()
        .filter(|member| matches_lowercase(member, &needle))
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
