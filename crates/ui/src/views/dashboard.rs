use dioxus::prelude::*;
use dioxus_router::Link;
use prep_core::DashboardScope;
use prep_core::model::Slug;
use services::ResolvedScreen;

use crate::routes::DashboardPage;
use crate::views::cards::ScopeHeader;
use crate::views::{StatusView, ViewState, use_resolved_screen, view_state_from_resource};
use crate::vm::ScopeVm;

#[component]
pub fn DashboardView(specialty: Slug, level: Slug, subspecialty: Slug) -> Element {
    rsx! {
        DashboardPanel {
            scope: DashboardScope {
                specialty,
                level,
                subspecialty: Some(subspecialty),
            },
        }
    }
}

#[component]
pub fn LevelDashboardView(specialty: Slug, level: Slug) -> Element {
    rsx! {
        DashboardPanel {
            scope: DashboardScope {
                specialty,
                level,
                subspecialty: None,
            },
        }
    }
}

#[component]
fn DashboardPanel(scope: DashboardScope) -> Element {
    let resource = use_resolved_screen(DashboardPage::Overview.screen(scope));
    let state = view_state_from_resource(&resource).narrow(|screen| match screen {
        ResolvedScreen::Dashboard { scope } => Some(ScopeVm::from(&scope)),
        _ => None,
    });

    rsx! {
        div { class: "page page--dashboard",
            match state {
                ViewState::Ready(scope) => rsx! {
                    ScopeHeader { scope: scope.clone(), active: DashboardPage::Overview }
                    div { class: "dashboard-tiles",
                        Link { class: "tile", to: scope.exams.clone(),
                            h3 { "Exams" }
                            p { "Past-year, authored and comprehensive exams" }
                        }
                        Link { class: "tile", to: scope.courses.clone(),
                            h3 { "Courses" }
                            p { "Study by textbook chapter and topic" }
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
