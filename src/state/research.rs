//! Read-only datasets for the intelligent research view.
//!
//! DESIGN
//! ======
//! These are curated mock datasets, not a store: nothing mutates them and
//! every page visit rebuilds its filtered view from the full list. The
//! research items carry the tag lists the search predicate matches against.

#[cfg(test)]
#[path = "research_test.rs"]
mod research_test;

use serde::{Deserialize, Serialize};

use super::vulnerabilities::Severity;

/// Category labels for the research database filter row, including the
/// "All" sentinel position handled by the filter logic as `None`.
pub const RESEARCH_CATEGORIES: [&str; 3] = ["Vulnerability", "Threat Intelligence", "Best Practices"];

/// A curated research entry: CVE write-up, advisory, or guide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResearchItem {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub severity: Severity,
    pub description: String,
    pub source: String,
    pub date: String,
    pub tags: Vec<String>,
    pub patch_risk_notes: String,
    pub url: String,
}

/// An active threat-intelligence entry with its indicators of compromise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreatIntel {
    pub threat: String,
    pub severity: Severity,
    pub description: String,
    pub indicators: Vec<String>,
}

/// One row of the trend-analysis card: a labelled delta percentage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRow {
    pub label: String,
    /// Signed percentage change; negative means declining activity.
    pub delta_percent: i32,
}

/// The curated research database shown on the research tab.
pub fn research_database() -> Vec<ResearchItem> {
    vec![
        ResearchItem {
            id: 1,
            title: "CVE-2024-0001: Critical SQL Injection in Web Applications".to_owned(),
            category: "Vulnerability".to_owned(),
            severity: Severity::Critical,
            description: "A critical SQL injection vulnerability affecting multiple web application frameworks.".to_owned(),
            source: "NIST NVD".to_owned(),
            date: "2024-01-15".to_owned(),
            tags: vec!["SQL Injection".to_owned(), "Web Security".to_owned(), "Critical".to_owned()],
            patch_risk_notes: "High impact on database integrity. Immediate patching required.".to_owned(),
            url: "https://nvd.nist.gov/vuln/detail/CVE-2024-0001".to_owned(),
        },
        ResearchItem {
            id: 2,
            title: "Zero-Day Exploit in Popular CMS Platform".to_owned(),
            category: "Threat Intelligence".to_owned(),
            severity: Severity::High,
            description: "Recently discovered zero-day exploit targeting content management systems.".to_owned(),
            source: "Security Research Lab".to_owned(),
            date: "2024-01-12".to_owned(),
            tags: vec!["Zero-Day".to_owned(), "CMS".to_owned(), "Exploit".to_owned()],
            patch_risk_notes: "No official patch available. Implement workarounds immediately.".to_owned(),
            url: "https://example.com/research/zero-day-cms".to_owned(),
        },
        ResearchItem {
            id: 3,
            title: "Best Practices for Container Security".to_owned(),
            category: "Best Practices".to_owned(),
            severity: Severity::Medium,
            description: "Comprehensive guide on securing containerized applications and infrastructure.".to_owned(),
            source: "Cloud Security Alliance".to_owned(),
            date: "2024-01-10".to_owned(),
            tags: vec!["Containers".to_owned(), "Docker".to_owned(), "Security".to_owned()],
            patch_risk_notes: "Implementation guidelines for enhanced container security posture.".to_owned(),
            url: "https://example.com/container-security-guide".to_owned(),
        },
        ResearchItem {
            id: 4,
            title: "Emerging Ransomware Tactics and Mitigation".to_owned(),
            category: "Threat Intelligence".to_owned(),
            severity: Severity::High,
            description: "Analysis of new ransomware attack vectors and defensive strategies.".to_owned(),
            source: "Cybersecurity Institute".to_owned(),
            date: "2024-01-08".to_owned(),
            tags: vec!["Ransomware".to_owned(), "Malware".to_owned(), "Defense".to_owned()],
            patch_risk_notes: "Update backup strategies and implement advanced threat detection.".to_owned(),
            url: "https://example.com/ransomware-analysis".to_owned(),
        },
    ]
}

/// Current threat-intelligence entries for the intelligence tab.
pub fn threat_intelligence() -> Vec<ThreatIntel> {
    vec![
        ThreatIntel {
            threat: "APT Group Activity".to_owned(),
            severity: Severity::High,
            description: "Increased activity from state-sponsored threat actors targeting infrastructure.".to_owned(),
            indicators: vec![
                "Suspicious network traffic".to_owned(),
                "Unusual login patterns".to_owned(),
                "File system modifications".to_owned(),
            ],
        },
        ThreatIntel {
            threat: "Phishing Campaign".to_owned(),
            severity: Severity::Medium,
            description: "Widespread phishing campaign targeting financial institutions.".to_owned(),
            indicators: vec![
                "Spoofed email domains".to_owned(),
                "Malicious attachments".to_owned(),
                "Social engineering".to_owned(),
            ],
        },
        ThreatIntel {
            threat: "Supply Chain Attack".to_owned(),
            severity: Severity::Critical,
            description: "Compromised software supply chain affecting multiple organizations.".to_owned(),
            indicators: vec![
                "Unauthorized code changes".to_owned(),
                "Suspicious dependencies".to_owned(),
                "Integrity violations".to_owned(),
            ],
        },
    ]
}

/// Rows for the trend-analysis card on the AI analysis tab.
pub fn trend_rows() -> Vec<TrendRow> {
    vec![
        TrendRow { label: "SQL Injection Attacks".to_owned(), delta_percent: 45 },
        TrendRow { label: "Ransomware Activity".to_owned(), delta_percent: 23 },
        TrendRow { label: "Phishing Campaigns".to_owned(), delta_percent: -12 },
    ]
}

/// AI-generated insight paragraphs for the analysis tab.
pub fn analysis_insights() -> Vec<&'static str> {
    vec![
        "Critical vulnerabilities in web applications have increased by 45% this month. Focus on input validation and secure coding practices.",
        "Zero-day exploits targeting container environments are emerging. Implement runtime security monitoring.",
        "Supply chain attacks are becoming more sophisticated. Enhance vendor security assessments.",
        "AI-powered attacks are on the rise. Consider implementing AI-based defense mechanisms.",
    ]
}
