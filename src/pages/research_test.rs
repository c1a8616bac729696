use super::*;

#[test]
fn default_tab_is_the_research_database() {
    assert_eq!(Tab::default(), Tab::Research);
}

#[test]
fn severity_badge_classes_are_distinct() {
    let classes: Vec<&str> = Severity::ALL.into_iter().map(severity_badge_class).collect();
    let mut deduped = classes.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), classes.len());
}
