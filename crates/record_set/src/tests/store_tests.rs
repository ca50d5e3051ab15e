use super::*;

fn sample() -> Vec<Member> {
    vec![
        Member::new(1, "Aaron Miles", "aaron@mailinator.com", "member"),
        Member::new(2, "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
        Member::new(3, "Arvind Kumar", "arvind@mailinator.com", "admin"),
    ]
}

#[test]
fn load_keeps_arrival_order() {
    let mut store = RecordStore::new();
    let duplicates = store.load(sample());

    assert!(duplicates.is_empty());
    let ids: Vec<i64> = store.members().iter().map(|m| m.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn load_drops_later_duplicate_ids() {
    let mut members = sample();
    members.push(Member::new(2, "Impostor", "x@x.com", "admin"));

    let mut store = RecordStore::new();
    let duplicates = store.load(members);

    assert_eq!(duplicates, vec![MemberId(2)]);
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(MemberId(2)).expect("member").name, "Aishwarya Naik");
}

#[test]
fn delete_where_ignores_unknown_and_empty_ids() {
    let mut store = RecordStore::new();
    store.load(sample());

    assert!(store.delete_where(&BTreeSet::new()).is_empty());
    assert!(store.delete_where(&BTreeSet::from([MemberId(99)])).is_empty());
    assert_eq!(store.len(), 3);

    let removed = store.delete_where(&BTreeSet::from([MemberId(1), MemberId(99)]));
    assert_eq!(removed, vec![MemberId(1)]);
    assert!(!store.contains(MemberId(1)));
    assert_eq!(store.len(), 2);
}

#[test]
fn replace_fields_merges_patch() {
    let mut store = RecordStore::new();
    store.load(sample());

    let patch = MemberPatch {
        email: Some("arvind@example.com".to_string()),
        ..MemberPatch::default()
    };
    let updated = store.replace_fields(MemberId(3), &patch).expect("replace");

    assert_eq!(updated.email, "arvind@example.com");
    assert_eq!(updated.name, "Arvind Kumar");
    assert_eq!(store.get(MemberId(3)), Some(&updated));
}

#[test]
fn replace_fields_reports_missing_member() {
    let mut store = RecordStore::new();
    store.load(sample());

    let err = store
        .replace_fields(MemberId(42), &MemberPatch::default())
        .expect_err("must fail");
    assert_eq!(err, ControllerError::NotFound(MemberId(42)));
}
