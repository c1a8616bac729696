//! Vulnerability-list state backing the dashboard and intake form.
//!
//! DESIGN
//! ======
//! Records are append-only and read-mostly: the intake form creates them and
//! the dashboard derives per-severity and per-status counts on every read.
//! There is deliberately no update or delete path. Ids come from a monotonic
//! counter owned by the store, so rapid successive submissions can never
//! collide.

#[cfg(test)]
#[path = "vulnerabilities_test.rs"]
mod vulnerabilities_test;

use serde::{Deserialize, Serialize};

/// Fixed severity scale used for badges and filtering. No numeric weighting
/// is defined between the levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All levels, in display order for filter button rows.
    pub const ALL: [Severity; 4] = [Severity::Critical, Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Parse a form-select value. Returns `None` for anything outside the
    /// fixed scale.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Critical" => Some(Severity::Critical),
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Triage status of a vulnerability record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VulnStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl VulnStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VulnStatus::Open => "Open",
            VulnStatus::InProgress => "In Progress",
            VulnStatus::Resolved => "Resolved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Open" => Some(VulnStatus::Open),
            "In Progress" => Some(VulnStatus::InProgress),
            "Resolved" => Some(VulnStatus::Resolved),
            _ => None,
        }
    }
}

/// A tracked vulnerability. `assignee` is denormalized free text, not a
/// reference to a user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub status: VulnStatus,
    pub assignee: String,
    pub date_found: String,
}

/// Form payload for a new record; the store assigns the id.
#[derive(Clone, Debug, PartialEq)]
pub struct VulnerabilityDraft {
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub status: VulnStatus,
    pub assignee: String,
    pub date_found: String,
}

/// Vulnerability store: an ordered list in append order, displayed as-is.
#[derive(Clone, Debug)]
pub struct VulnerabilitiesState {
    pub items: Vec<Vulnerability>,
    next_id: u64,
}

impl Default for VulnerabilitiesState {
    fn default() -> Self {
        let items = seed_vulnerabilities();
        let next_id = items.len() as u64 + 1;
        Self { items, next_id }
    }
}

impl VulnerabilitiesState {
    /// Append a new record and return its id. No uniqueness check beyond the
    /// counter itself.
    pub fn add(&mut self, draft: VulnerabilityDraft) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Vulnerability {
            id,
            name: draft.name,
            description: draft.description,
            severity: draft.severity,
            status: draft.status,
            assignee: draft.assignee,
            date_found: draft.date_found,
        });
        id
    }

    /// Number of records at the given severity. Recomputed per read, O(n).
    pub fn severity_count(&self, severity: Severity) -> usize {
        self.items.iter().filter(|v| v.severity == severity).count()
    }

    /// Number of records in the given status. Recomputed per read, O(n).
    pub fn status_count(&self, status: VulnStatus) -> usize {
        self.items.iter().filter(|v| v.status == status).count()
    }
}

/// Mock records seeded at startup. State is memory-only and resets on reload.
fn seed_vulnerabilities() -> Vec<Vulnerability> {
    vec![
        Vulnerability {
            id: 1,
            name: "SQL Injection in Login Form".to_owned(),
            description: "User-supplied credentials reach the database query without parameterization."
                .to_owned(),
            severity: Severity::Critical,
            status: VulnStatus::Open,
            assignee: "John Doe".to_owned(),
            date_found: "2024-01-15".to_owned(),
        },
        Vulnerability {
            id: 2,
            name: "Cross-Site Scripting in Comment Section".to_owned(),
            description: "Stored XSS via unescaped comment bodies rendered on the product pages."
                .to_owned(),
            severity: Severity::High,
            status: VulnStatus::InProgress,
            assignee: "Jane Smith".to_owned(),
            date_found: "2024-01-12".to_owned(),
        },
        Vulnerability {
            id: 3,
            name: "Expired SSL Certificate on Main Domain".to_owned(),
            description: "The primary domain served an expired certificate for six hours.".to_owned(),
            severity: Severity::Medium,
            status: VulnStatus::Resolved,
            assignee: "Mike Johnson".to_owned(),
            date_found: "2024-01-10".to_owned(),
        },
        Vulnerability {
            id: 4,
            name: "Weak Password Policy".to_owned(),
            description: "Password complexity requirements allow six-character dictionary words."
                .to_owned(),
            severity: Severity::Low,
            status: VulnStatus::Open,
            assignee: "Sarah Wilson".to_owned(),
            date_found: "2024-01-08".to_owned(),
        },
        Vulnerability {
            id: 5,
            name: "Unpatched Apache Server".to_owned(),
            description: "Production web tier runs an Apache build with known remote exploits."
                .to_owned(),
            severity: Severity::High,
            status: VulnStatus::InProgress,
            assignee: "Tom Brown".to_owned(),
            date_found: "2024-01-05".to_owned(),
        },
    ]
}
