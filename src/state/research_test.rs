use super::*;

#[test]
fn research_database_has_four_items_with_unique_ids() {
    let items = research_database();
    assert_eq!(items.len(), 4);
    let mut ids: Vec<u64> = items.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn every_item_uses_a_known_category() {
    for item in research_database() {
        assert!(
            RESEARCH_CATEGORIES.contains(&item.category.as_str()),
            "unknown category {:?}",
            item.category
        );
    }
}

#[test]
fn threat_intelligence_entries_carry_indicators() {
    let entries = threat_intelligence();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|t| !t.indicators.is_empty()));
}

#[test]
fn trend_rows_include_one_declining_metric() {
    let rows = trend_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().filter(|r| r.delta_percent < 0).count(), 1);
}

#[test]
fn analysis_insights_are_nonempty() {
    assert_eq!(analysis_insights().len(), 4);
}
