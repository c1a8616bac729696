use super::*;

#[test]
fn completion_patch_touches_only_progress_and_status() {
    let patch = completion_patch();
    assert_eq!(patch.progress, Some(100));
    assert_eq!(patch.status, Some(ProjectStatus::Completed));
    assert!(patch.name.is_none());
    assert!(patch.priority.is_none());
    assert!(patch.due_date.is_none());
    assert!(patch.assignees.is_none());
    assert!(patch.vulnerabilities.is_none());
    assert!(patch.ai_insights.is_none());
}

#[test]
fn completion_patch_completes_a_seed_project() {
    let mut state = ProjectsState::default();
    state.update(1, completion_patch()).unwrap();
    let project = state.projects.iter().find(|p| p.id == 1).unwrap();
    assert_eq!(project.progress, 100);
    assert_eq!(project.status, ProjectStatus::Completed);
}

#[test]
fn recommendation_confidences_are_percentages() {
    assert!(RECOMMENDATIONS.iter().all(|r| r.confidence <= 100));
}

#[test]
fn status_and_priority_classes_are_distinct() {
    assert_ne!(status_class(ProjectStatus::Planning), status_class(ProjectStatus::Completed));
    assert_ne!(priority_class(Priority::High), priority_class(Priority::Low));
}
