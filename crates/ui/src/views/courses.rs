use dioxus::prelude::*;
use prep_core::DashboardScope;
use prep_core::model::Slug;
use services::ResolvedScreen;

use crate::routes::DashboardPage;
use crate::views::cards::{RowList, ScopeHeader};
use crate::views::{StatusView, ViewState, use_resolved_screen, view_state_from_resource};
use crate::vm::{RowVm, ScopeVm, map_course_rows};

#[derive(Clone, Debug, PartialEq)]
struct CoursesData {
    scope: ScopeVm,
    rows: Vec<RowVm>,
}

#[component]
pub fn CoursesView(specialty: Slug, level: Slug, subspecialty: Slug) -> Element {
    rsx! {
        CoursesPanel {
            scope: DashboardScope {
                specialty,
                level,
                subspecialty: Some(subspecialty),
            },
        }
    }
}

#[component]
pub fn LevelCoursesView(specialty: Slug, level: Slug) -> Element {
    rsx! {
        CoursesPanel {
            scope: DashboardScope {
                specialty,
                level,
                subspecialty: None,
            },
        }
    }
}

#[component]
fn CoursesPanel(scope: DashboardScope) -> Element {
    let resource = use_resolved_screen(DashboardPage::Courses.screen(scope));
    let state = view_state_from_resource(&resource).narrow(|screen| match screen {
        ResolvedScreen::Courses { scope, courses } => Some(CoursesData {
            scope: ScopeVm::from(&scope),
            rows: map_course_rows(&courses),
        }),
        _ => None,
    });

    rsx! {
        div { class: "page page--courses",
            match state {
                ViewState::Ready(data) => rsx! {
                    ScopeHeader { scope: data.scope, active: DashboardPage::Courses }
                    RowList { rows: data.rows, empty: "No courses for this scope yet." }
                },
                other => rsx! {
                    StatusView { state: other.status() }
                },
            }
        }
    }
}
