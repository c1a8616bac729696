//! AI project management: recommendations, stats, and the project list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only view that exercises the project store's partial-update path: the
//! details dialog can mark a project completed, and the add dialog feeds the
//! prepend-insertion path. A failed update (unknown id) surfaces as a page
//! notice rather than disappearing.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::projects::{
    Priority, Project, ProjectDraft, ProjectPatch, ProjectStatus, ProjectsState, parse_assignees,
};

/// A static AI recommendation card.
struct Recommendation {
    kind: &'static str,
    message: &'static str,
    confidence: u8,
}

/// Curated recommendation cards shown above the project list.
const RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation {
        kind: "Priority",
        message: "Focus on SQL injection vulnerabilities first - they pose the highest risk",
        confidence: 95,
    },
    Recommendation {
        kind: "Resource",
        message: "Assign additional security engineer to Q1 Security Audit project",
        confidence: 87,
    },
    Recommendation {
        kind: "Timeline",
        message: "Infrastructure Hardening project may need 2 weeks extension",
        confidence: 78,
    },
];

/// CSS modifier for a project status dot.
fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "dot--resolved",
        ProjectStatus::InProgress => "dot--in-progress",
        ProjectStatus::Planning => "dot--planning",
    }
}

/// CSS modifier for a priority badge.
fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge--open",
        Priority::Medium => "badge--in-progress",
        Priority::Low => "badge--resolved",
    }
}

/// The patch applied by the details dialog's completion action.
fn completion_patch() -> ProjectPatch {
    ProjectPatch {
        progress: Some(100),
        status: Some(ProjectStatus::Completed),
        ..ProjectPatch::default()
    }
}

/// Project management page.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();

    let show_add = RwSignal::new(false);
    let details_id = RwSignal::new(None::<u64>);
    let notice = RwSignal::new(String::new());

    let stats = move || {
        let state = projects.get();
        vec![
            ("Active Projects", state.active_count().to_string()),
            ("Total Vulnerabilities", state.total_vulnerabilities().to_string()),
            ("Completed Projects", state.completed_count().to_string()),
            ("Avg. Resolution Time", "3.2d".to_owned()),
        ]
    };

    let on_add_cancel = Callback::new(move |()| show_add.set(false));
    let on_details_close = Callback::new(move |()| details_id.set(None));

    view! {
        <Title text="AI Project Management - SHERPA AI Vulnerability Management"/>
        <div class="page">
            <Navbar/>
            <Sidebar/>
            <main class="page__content">
                <header class="page__header">
                    <div>
                        <h1>"AI Project Management"</h1>
                        <p class="page__subtitle">
                            "Intelligent project workflows powered by AI insights"
                        </p>
                    </div>
                    <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                        "+ New Project"
                    </button>
                </header>

                <Show when=move || !notice.get().is_empty()>
                    <p class="page__notice">{move || notice.get()}</p>
                </Show>

                <section class="card">
                    <h2>"AI Recommendations"</h2>
                    <p class="card__description">"Smart insights to optimize your security projects"</p>
                    <div class="recommendation-list">
                        {RECOMMENDATIONS
                            .iter()
                            .map(|rec| {
                                view! {
                                    <div class="recommendation-list__item">
                                        <span class="badge badge--outline">{rec.kind}</span>
                                        <span class="recommendation-list__confidence">
                                            {format!("{}% confidence", rec.confidence)}
                                        </span>
                                        <p>{rec.message}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <div class="stat-grid">
                    {move || {
                        stats()
                            .into_iter()
                            .map(|(title, value)| {
                                view! {
                                    <div class="stat-card">
                                        <span class="stat-card__title">{title}</span>
                                        <span class="stat-card__value">{value}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <section class="card">
                    <h2>"Security Projects"</h2>
                    <p class="card__description">
                        "Manage and track your security remediation projects"
                    </p>
                    <div class="project-list">
                        {move || {
                            projects
                                .get()
                                .projects
                                .into_iter()
                                .map(|project| {
                                    let id = project.id;
                                    view! {
                                        <div
                                            class="project-list__item"
                                            on:click=move |_| details_id.set(Some(id))
                                        >
                                            <div class="project-list__head">
                                                <span class=format!("dot {}", status_class(project.status))></span>
                                                <h3>{project.name.clone()}</h3>
                                                <span class=format!("badge {}", priority_class(project.priority))>
                                                    {project.priority.as_str()}
                                                </span>
                                            </div>
                                            <div class="project-list__meta">
                                                <span>{format!("Due: {}", project.due_date)}</span>
                                                <span>{format!("{} assignees", project.assignees.len())}</span>
                                                <span>{format!("{} vulnerabilities", project.vulnerabilities)}</span>
                                            </div>
                                            <div class="progress">
                                                <div class="progress__track">
                                                    <div
                                                        class="progress__fill"
                                                        style:width=format!("{}%", project.progress)
                                                    ></div>
                                                </div>
                                                <span class="progress__value">
                                                    {format!("{}%", project.progress)}
                                                </span>
                                            </div>
                                            <div class="project-list__insight">
                                                <span class="project-list__insight-label">"AI Insight"</span>
                                                <p>{project.ai_insights.clone()}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
            </main>
            <Show when=move || show_add.get()>
                <AddProjectDialog projects=projects on_cancel=on_add_cancel/>
            </Show>
            <Show when=move || details_id.get().is_some()>
                <ProjectDetailsDialog
                    projects=projects
                    details_id=details_id
                    notice=notice
                    on_close=on_details_close
                />
            </Show>
        </div>
    }
}

/// Modal dialog for creating a new project.
#[component]
fn AddProjectDialog(projects: RwSignal<ProjectsState>, on_cancel: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());
    let priority = RwSignal::new("Medium".to_owned());
    let assignees = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let project_name = name.get();
        if project_name.trim().is_empty() {
            return;
        }
        let draft = ProjectDraft {
            name: project_name.trim().to_owned(),
            due_date: due_date.get(),
            priority: Priority::parse(&priority.get()).unwrap_or(Priority::Medium),
            assignees: parse_assignees(&assignees.get()),
        };
        projects.update(|state| {
            state.add(draft);
        });
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Project"</h2>
                <p class="dialog__description">
                    "Enter the details for the new security project."
                </p>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Due Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| due_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Priority"
                    <select
                        class="dialog__input"
                        prop:value=move || priority.get()
                        on:change=move |ev| priority.set(event_target_value(&ev))
                    >
                        <option value="High">"High"</option>
                        <option value="Medium">"Medium"</option>
                        <option value="Low">"Low"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Assignees"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="John, Jane (comma-separated)"
                        prop:value=move || assignees.get()
                        on:input=move |ev| assignees.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save Project"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Details dialog with the completion action.
#[component]
fn ProjectDetailsDialog(
    projects: RwSignal<ProjectsState>,
    details_id: RwSignal<Option<u64>>,
    notice: RwSignal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let selected = move || -> Option<Project> {
        let id = details_id.get()?;
        projects.get().projects.into_iter().find(|p| p.id == id)
    };

    let on_complete = move |_| {
        let Some(id) = details_id.get_untracked() else {
            return;
        };
        let mut outcome = Ok(());
        projects.update(|state| {
            outcome = state.update(id, completion_patch());
        });
        if let Err(e) = outcome {
            notice.set(e.to_string());
        }
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                {move || {
                    selected()
                        .map(|project| {
                            let completed = project.status == ProjectStatus::Completed;
                            view! {
                                <h2>{project.name.clone()}</h2>
                                <dl class="dialog__fields">
                                    <dt>"Status"</dt>
                                    <dd>{project.status.as_str()}</dd>
                                    <dt>"Priority"</dt>
                                    <dd>{project.priority.as_str()}</dd>
                                    <dt>"Due Date"</dt>
                                    <dd>{project.due_date.clone()}</dd>
                                    <dt>"Vulnerabilities"</dt>
                                    <dd>{project.vulnerabilities}</dd>
                                    <dt>"Assignees"</dt>
                                    <dd>{project.assignees.join(", ")}</dd>
                                    <dt>"Progress"</dt>
                                    <dd>{format!("{}%", project.progress)}</dd>
                                    <dt>"AI Insights"</dt>
                                    <dd>{project.ai_insights.clone()}</dd>
                                </dl>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=move |_| on_close.run(())>
                                        "Close"
                                    </button>
                                    <Show when=move || !completed>
                                        <button class="btn btn--primary" on:click=on_complete>
                                            "Mark Completed"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
