use super::*;

#[test]
fn severity_classes_are_distinct() {
    let classes: Vec<&str> = Severity::ALL.into_iter().map(severity_class).collect();
    let mut deduped = classes.clone();
    deduped.dedup();
    assert_eq!(classes, deduped);
}

#[test]
fn status_classes_cover_every_status() {
    assert_eq!(status_class(VulnStatus::Open), "badge--open");
    assert_eq!(status_class(VulnStatus::InProgress), "badge--in-progress");
    assert_eq!(status_class(VulnStatus::Resolved), "badge--resolved");
}

#[test]
fn recent_activity_has_four_entries() {
    assert_eq!(RECENT_ACTIVITY.len(), 4);
}
