//! Search and category filtering for list views.
//!
//! DESIGN
//! ======
//! Stateless and recomputed per render: a case-insensitive substring match
//! over each view's text fields, intersected with an exact category or
//! severity selector. `None` plays the "All" role the UI's sentinel button
//! maps to. Lists here are small, so the O(n * fields) scan needs no index
//! and is safe to run on every keystroke. Inputs are never mutated and
//! output order follows input order, which makes the functions idempotent.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::state::research::ResearchItem;
use crate::state::vulnerabilities::{Severity, Vulnerability};

/// True when `query` is a case-insensitive substring of any field. The empty
/// query matches everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Filter the dashboard list: query over name + description, exact severity
/// unless `severity` is `None` ("All").
pub fn filter_vulnerabilities(
    items: &[Vulnerability],
    query: &str,
    severity: Option<Severity>,
) -> Vec<Vulnerability> {
    items
        .iter()
        .filter(|v| matches_query(&[&v.name, &v.description], query))
        .filter(|v| severity.is_none_or(|s| v.severity == s))
        .cloned()
        .collect()
}

/// Filter the research database: query over title + description + tags,
/// exact category unless `category` is `None` ("All").
pub fn filter_research(items: &[ResearchItem], query: &str, category: Option<&str>) -> Vec<ResearchItem> {
    items
        .iter()
        .filter(|item| {
            let mut fields: Vec<&str> = vec![&item.title, &item.description];
            fields.extend(item.tags.iter().map(String::as_str));
            matches_query(&fields, query)
        })
        .filter(|item| category.is_none_or(|c| item.category == c))
        .cloned()
        .collect()
}
