use dioxus::prelude::*;
use dioxus_router::Link;
use prep_core::DashboardScope;
use prep_core::model::Slug;
use services::ResolvedScreen;

use crate::routes::DashboardPage;
use crate::views::cards::ScopeHeader;
use crate::views::{StatusView, ViewState, use_resolved_screen, view_state_from_resource};
use crate::vm::{ExamGroupVm, ScopeVm, map_exam_groups};

#[derive(Clone, Debug, PartialEq)]
struct ExamsData {
    scope: ScopeVm,
    groups: Vec<ExamGroupVm>,
}

#[component]
pub fn ExamsView(specialty: Slug, level: Slug, subspecialty: Slug) -> Element {
    rsx! {
        ExamsPanel {
            scope: DashboardScope {
                specialty,
                level,
                subspecialty: Some(subspecialty),
            },
        }
    }
}

#[component]
pub fn LevelExamsView(specialty: Slug, level: Slug) -> Element {
    rsx! {
        ExamsPanel {
            scope: DashboardScope {
                specialty,
                level,
                subspecialty: None,
            },
        }
    }
}

#[component]
fn ExamsPanel(scope: DashboardScope) -> Element {
    let resource = use_resolved_screen(DashboardPage::Exams.screen(scope));
    let state = view_state_from_resource(&resource).narrow(|screen| match screen {
        ResolvedScreen::Exams { scope, groups } => Some(ExamsData {
            scope: ScopeVm::from(&scope),
            groups: map_exam_groups(&groups),
        }),
        _ => None,
    });

    rsx! {
        div { class: "page page--exams",
            match state {
                ViewState::Ready(data) => rsx! {
                    ScopeHeader { scope: data.scope, active: DashboardPage::Exams }
                    if data.groups.is_empty() {
                        p { class: "empty", "No exams are available yet." }
                    }
                    for group in data.groups {
                        section { key: "{group.label}", class: "exam-group",
                            h3 { "{group.label}" }
                            ul { class: "exam-list",
                                for exam in group.exams {
                                    li { key: "{exam.key}", class: "exam-card",
                                        span { class: "exam-card__title", "{exam.title}" }
                                        span { class: "exam-card__meta", "{exam.meta}" }
                                        Link {
                                            class: "button",
                                            to: exam.route.clone(),
                                            "Start exam"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                other => rsx! {
                    StatusView { state: other.status() }
                },
            }
        }
    }
}
