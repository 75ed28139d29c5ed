use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::DashboardPage;
use crate::vm::{EntryCardVm, RowVm, ScopeVm};

/// Grid of large choice cards (specialties, levels, subspecialties).
#[component]
pub fn EntryGrid(cards: Vec<EntryCardVm>, empty: &'static str) -> Element {
    if cards.is_empty() {
        return rsx! {
            p { class: "empty", "{empty}" }
        };
    }

    rsx! {
        ul { class: "entry-grid",
            for card in cards {
                li { key: "{card.key}", class: "entry-card",
                    Link { to: card.route.clone(),
                        if !card.icon.is_empty() {
                            span { class: "entry-card__icon", "{card.icon}" }
                        }
                        span { class: "entry-card__title", "{card.title}" }
                        span { class: "entry-card__subtitle", "{card.subtitle}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RowList(rows: Vec<RowVm>, empty: &'static str) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "empty", "{empty}" }
        };
    }

    rsx! {
        ul { class: "row-list",
            for row in rows {
                li { key: "{row.key}", class: "row",
                    Link { to: row.route.clone(),
                        span { class: "row__title", "{row.title}" }
                        if !row.detail.is_empty() {
                            span { class: "row__detail", "{row.detail}" }
                        }
                    }
                }
            }
        }
    }
}

/// Breadcrumb plus the overview / exams / courses tabs of a dashboard scope.
#[component]
pub fn ScopeHeader(scope: ScopeVm, active: DashboardPage) -> Element {
    let tab = |page: DashboardPage| {
        if page == active { "tab tab--active" } else { "tab" }
    };
    let crumbs = scope.trail.join(" / ");

    rsx! {
        header { class: "scope-header",
            p { class: "breadcrumb", "{crumbs}" }
            nav { class: "tabs",
                Link { class: tab(DashboardPage::Overview), to: scope.overview.clone(), "Overview" }
                Link { class: tab(DashboardPage::Exams), to: scope.exams.clone(), "Exams" }
                Link { class: tab(DashboardPage::Courses), to: scope.courses.clone(), "Courses" }
            }
        }
    }
}
