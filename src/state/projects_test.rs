use super::*;

fn draft(name: &str) -> ProjectDraft {
    ProjectDraft {
        name: name.to_owned(),
        due_date: "2024-06-30".to_owned(),
        priority: Priority::Medium,
        assignees: vec!["QA".to_owned()],
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_seeds_three_projects() {
    let state = ProjectsState::default();
    assert_eq!(state.projects.len(), 3);
    assert_eq!(state.projects[0].name, "Q1 Security Audit");
}

// =============================================================
// add
// =============================================================

#[test]
fn add_prepends_newest_first() {
    let mut state = ProjectsState::default();
    state.add(draft("Pen Test"));
    assert_eq!(state.projects.len(), 4);
    assert_eq!(state.projects[0].name, "Pen Test");
}

#[test]
fn head_is_always_the_most_recent_add() {
    let mut state = ProjectsState::default();
    for name in ["One", "Two", "Three"] {
        state.add(draft(name));
        assert_eq!(state.projects[0].name, name);
    }
}

#[test]
fn add_applies_new_project_defaults() {
    let mut state = ProjectsState::default();
    state.add(draft("Pen Test"));
    let head = &state.projects[0];
    assert_eq!(head.status, ProjectStatus::Planning);
    assert_eq!(head.progress, 0);
    assert_eq!(head.vulnerabilities, 0);
    assert_eq!(head.ai_insights, "Awaiting initial scan and analysis.");
}

#[test]
fn add_assigns_ids_past_the_seeds() {
    let mut state = ProjectsState::default();
    let first = state.add(draft("A"));
    let second = state.add(draft("B"));
    assert_eq!(first, 4);
    assert_eq!(second, 5);
}

// =============================================================
// update
// =============================================================

#[test]
fn update_merges_present_fields_only() {
    let mut state = ProjectsState::default();
    let patch = ProjectPatch {
        progress: Some(100),
        status: Some(ProjectStatus::Completed),
        ..ProjectPatch::default()
    };
    state.update(2, patch).unwrap();

    let updated = state.projects.iter().find(|p| p.id == 2).unwrap();
    assert_eq!(updated.progress, 100);
    assert_eq!(updated.status, ProjectStatus::Completed);
    // Untouched fields on the patched record.
    assert_eq!(updated.name, "Infrastructure Hardening");
    assert_eq!(updated.priority, Priority::Medium);
    assert_eq!(updated.due_date, "2024-04-15");
    assert_eq!(updated.vulnerabilities, 8);
}

#[test]
fn update_leaves_other_projects_untouched() {
    let before = ProjectsState::default();
    let mut state = ProjectsState::default();
    let patch = ProjectPatch {
        progress: Some(100),
        status: Some(ProjectStatus::Completed),
        ..ProjectPatch::default()
    };
    state.update(2, patch).unwrap();

    for id in [1, 3] {
        let original = before.projects.iter().find(|p| p.id == id).unwrap();
        let after = state.projects.iter().find(|p| p.id == id).unwrap();
        assert_eq!(original, after);
    }
}

#[test]
fn update_unknown_id_is_an_error_and_a_no_op() {
    let before = ProjectsState::default();
    let mut state = ProjectsState::default();
    let patch = ProjectPatch {
        progress: Some(1),
        ..ProjectPatch::default()
    };
    assert_eq!(state.update(99, patch), Err(StoreError::ProjectNotFound(99)));
    assert_eq!(state.projects, before.projects);
}

// =============================================================
// Derived counts
// =============================================================

#[test]
fn counts_over_seed_data() {
    let state = ProjectsState::default();
    assert_eq!(state.active_count(), 2);
    assert_eq!(state.completed_count(), 1);
    assert_eq!(state.total_vulnerabilities(), 23);
}

// =============================================================
// parse_assignees
// =============================================================

#[test]
fn parse_assignees_trims_and_drops_empties() {
    assert_eq!(
        parse_assignees(" John Doe ,Jane Smith,, , Tom "),
        vec!["John Doe".to_owned(), "Jane Smith".to_owned(), "Tom".to_owned()]
    );
}

#[test]
fn parse_assignees_of_blank_input_is_empty() {
    assert!(parse_assignees("").is_empty());
    assert!(parse_assignees("  ,  ,").is_empty());
}

#[test]
fn parse_assignees_preserves_order() {
    assert_eq!(parse_assignees("b, a, c"), vec!["b", "a", "c"]);
}
