//! Project-list state for the AI project management view.
//!
//! DESIGN
//! ======
//! Newest project first: `add` prepends so the list reads as a reverse
//! chronology. Updates are identifier-matched partial merges; a patch to an
//! unknown id returns `StoreError::ProjectNotFound` and changes nothing.
//! Assignees enter the store as a validated list of trimmed non-empty names,
//! parsed once at the form boundary by [`parse_assignees`].

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::{Deserialize, Serialize};

use super::StoreError;

/// Lifecycle stage of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// Scheduling priority. Independent of vulnerability severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse a form-select value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "High" => Some(Priority::High),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// A security remediation project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    /// Completion percentage, 0-100 by construction of the intake form.
    pub progress: u8,
    pub due_date: String,
    pub assignees: Vec<String>,
    /// Open vulnerability count attributed to this project.
    pub vulnerabilities: u32,
    pub ai_insights: String,
}

/// Form payload for a new project. The store assigns the id and the
/// new-project defaults (Planning, zero progress, pending insights).
#[derive(Clone, Debug)]
pub struct ProjectDraft {
    pub name: String,
    pub due_date: String,
    pub priority: Priority,
    pub assignees: Vec<String>,
}

/// Partial update: present fields overwrite, absent fields are untouched.
#[derive(Clone, Debug, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub progress: Option<u8>,
    pub due_date: Option<String>,
    pub assignees: Option<Vec<String>>,
    pub vulnerabilities: Option<u32>,
    pub ai_insights: Option<String>,
}

/// Project store, newest first.
#[derive(Clone, Debug)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
    next_id: u64,
}

impl Default for ProjectsState {
    fn default() -> Self {
        let projects = seed_projects();
        let next_id = projects.len() as u64 + 1;
        Self { projects, next_id }
    }
}

impl ProjectsState {
    /// Create a project from the intake form and return its id. The new
    /// record becomes the head of the list.
    pub fn add(&mut self, draft: ProjectDraft) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.projects.insert(
            0,
            Project {
                id,
                name: draft.name,
                status: ProjectStatus::Planning,
                priority: draft.priority,
                progress: 0,
                due_date: draft.due_date,
                assignees: draft.assignees,
                vulnerabilities: 0,
                ai_insights: "Awaiting initial scan and analysis.".to_owned(),
            },
        );
        id
    }

    /// Merge `patch` into the first project with a matching id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProjectNotFound`] (store unchanged) when no
    /// project has the given id.
    pub fn update(&mut self, id: u64, patch: ProjectPatch) -> Result<(), StoreError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProjectNotFound(id))?;
        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(status) = patch.status {
            project.status = status;
        }
        if let Some(priority) = patch.priority {
            project.priority = priority;
        }
        if let Some(progress) = patch.progress {
            project.progress = progress;
        }
        if let Some(due_date) = patch.due_date {
            project.due_date = due_date;
        }
        if let Some(assignees) = patch.assignees {
            project.assignees = assignees;
        }
        if let Some(vulnerabilities) = patch.vulnerabilities {
            project.vulnerabilities = vulnerabilities;
        }
        if let Some(ai_insights) = patch.ai_insights {
            project.ai_insights = ai_insights;
        }
        Ok(())
    }

    /// Projects not yet completed.
    pub fn active_count(&self) -> usize {
        self.projects.iter().filter(|p| p.status != ProjectStatus::Completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.projects.iter().filter(|p| p.status == ProjectStatus::Completed).count()
    }

    /// Sum of vulnerability counts across all projects.
    pub fn total_vulnerabilities(&self) -> u32 {
        self.projects.iter().map(|p| p.vulnerabilities).sum()
    }
}

/// Split a comma-separated assignee field into trimmed non-empty names,
/// preserving order.
pub fn parse_assignees(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Mock projects seeded at startup.
fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Q1 Security Audit".to_owned(),
            status: ProjectStatus::InProgress,
            priority: Priority::High,
            progress: 65,
            due_date: "2024-03-31".to_owned(),
            assignees: vec!["John Doe".to_owned(), "Jane Smith".to_owned()],
            vulnerabilities: 12,
            ai_insights: "Critical SQL injection patterns detected. Recommend immediate patching."
                .to_owned(),
        },
        Project {
            id: 2,
            name: "Infrastructure Hardening".to_owned(),
            status: ProjectStatus::Planning,
            priority: Priority::Medium,
            progress: 25,
            due_date: "2024-04-15".to_owned(),
            assignees: vec!["Mike Johnson".to_owned()],
            vulnerabilities: 8,
            ai_insights: "Network segmentation gaps identified. AI suggests firewall rule optimization."
                .to_owned(),
        },
        Project {
            id: 3,
            name: "Compliance Review".to_owned(),
            status: ProjectStatus::Completed,
            priority: Priority::Low,
            progress: 100,
            due_date: "2024-02-28".to_owned(),
            assignees: vec!["Sarah Wilson".to_owned(), "Tom Brown".to_owned()],
            vulnerabilities: 3,
            ai_insights: "All compliance requirements met. Minimal security gaps detected.".to_owned(),
        },
    ]
}
