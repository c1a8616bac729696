use super::*;
use crate::state::research::research_database;
use crate::state::vulnerabilities::{VulnStatus, VulnerabilitiesState};

fn seed_items() -> Vec<Vulnerability> {
    VulnerabilitiesState::default().items
}

// =============================================================
// matches_query
// =============================================================

#[test]
fn empty_query_matches_everything() {
    assert!(matches_query(&[], ""));
    assert!(matches_query(&["anything"], ""));
}

#[test]
fn query_match_is_case_insensitive() {
    assert!(matches_query(&["SQL Injection"], "sql"));
    assert!(matches_query(&["sql injection"], "SQL"));
}

#[test]
fn query_matches_any_field() {
    assert!(matches_query(&["title", "long description"], "descr"));
    assert!(!matches_query(&["title", "description"], "missing"));
}

// =============================================================
// Vulnerability filtering
// =============================================================

#[test]
fn empty_query_and_all_severity_is_identity() {
    let items = seed_items();
    let filtered = filter_vulnerabilities(&items, "", None);
    assert_eq!(filtered, items);
}

#[test]
fn severity_selector_is_exact_match() {
    let items = seed_items();
    let filtered = filter_vulnerabilities(&items, "", Some(Severity::High));
    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|v| v.severity == Severity::High));
}

#[test]
fn query_and_severity_intersect() {
    let items = seed_items();
    let filtered = filter_vulnerabilities(&items, "sql", Some(Severity::Low));
    assert!(filtered.is_empty());
}

#[test]
fn query_searches_description_too() {
    let items = seed_items();
    let filtered = filter_vulnerabilities(&items, "parameterization", None);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "SQL Injection in Login Form");
}

#[test]
fn filtering_does_not_mutate_the_source() {
    let items = seed_items();
    let before = items.clone();
    let _ = filter_vulnerabilities(&items, "xss", Some(Severity::High));
    assert_eq!(items, before);
}

#[test]
fn filter_is_idempotent() {
    let items = seed_items();
    for (query, severity) in [("", None), ("sql", None), ("e", Some(Severity::High))] {
        let once = filter_vulnerabilities(&items, query, severity);
        let twice = filter_vulnerabilities(&once, query, severity);
        assert_eq!(once, twice);
    }
}

#[test]
fn filter_preserves_input_order() {
    let items = seed_items();
    let filtered = filter_vulnerabilities(&items, "", Some(Severity::High));
    let positions: Vec<usize> = filtered
        .iter()
        .map(|f| items.iter().position(|v| v.id == f.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn no_match_yields_empty_not_error() {
    let items = seed_items();
    assert!(filter_vulnerabilities(&items, "quantum", None).is_empty());
}

#[test]
fn status_is_not_part_of_the_predicate() {
    let items = seed_items();
    let filtered = filter_vulnerabilities(&items, "", Some(Severity::High));
    assert!(filtered.iter().any(|v| v.status == VulnStatus::InProgress));
}

// =============================================================
// Research filtering
// =============================================================

#[test]
fn research_query_sql_finds_exactly_the_cve_item() {
    let items = research_database();
    let filtered = filter_research(&items, "sql", None);
    assert_eq!(filtered.len(), 1);
    assert!(filtered[0].title.starts_with("CVE-2024-0001"));
}

#[test]
fn research_category_threat_intelligence_has_two_entries() {
    let items = research_database();
    let filtered = filter_research(&items, "", Some("Threat Intelligence"));
    assert_eq!(filtered.len(), 2);
}

#[test]
fn research_query_matches_tags() {
    let items = research_database();
    let filtered = filter_research(&items, "docker", None);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Best Practices for Container Security");
}

#[test]
fn research_filter_is_idempotent() {
    let items = research_database();
    let once = filter_research(&items, "zero", Some("Threat Intelligence"));
    let twice = filter_research(&once, "zero", Some("Threat Intelligence"));
    assert_eq!(once, twice);
}

#[test]
fn research_empty_query_and_all_category_is_identity() {
    let items = research_database();
    assert_eq!(filter_research(&items, "", None), items);
}
