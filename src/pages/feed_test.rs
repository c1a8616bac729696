use super::*;

#[test]
fn build_draft_trims_and_defaults_to_open() {
    let draft = build_draft("  Heap Overflow  ", " details ", "High", " sec-team ", "2024-02-01").unwrap();
    assert_eq!(draft.name, "Heap Overflow");
    assert_eq!(draft.description, "details");
    assert_eq!(draft.severity, Severity::High);
    assert_eq!(draft.status, VulnStatus::Open);
    assert_eq!(draft.assignee, "sec-team");
    assert_eq!(draft.date_found, "2024-02-01");
}

#[test]
fn build_draft_requires_a_name() {
    assert_eq!(
        build_draft("   ", "details", "High", "", "2024-02-01"),
        Err("Enter a vulnerability name.")
    );
}

#[test]
fn build_draft_requires_a_description() {
    assert_eq!(
        build_draft("Name", "", "High", "", "2024-02-01"),
        Err("Enter a description.")
    );
}

#[test]
fn build_draft_rejects_unknown_severity() {
    assert_eq!(
        build_draft("Name", "details", "Extreme", "", "2024-02-01"),
        Err("Select a severity.")
    );
}

#[test]
fn submitted_draft_lands_in_the_store() {
    let mut state = VulnerabilitiesState::default();
    let before = state.items.len();
    let draft = build_draft("CSRF on Billing", "missing token check", "Medium", "", "2024-02-02").unwrap();
    state.add(draft);
    assert_eq!(state.items.len(), before + 1);
    assert_eq!(state.items.last().unwrap().name, "CSRF on Billing");
}
