use dioxus::prelude::*;
use dioxus_router::Link;
use prep_core::Screen;
use prep_core::model::Slug;
use services::ResolvedScreen;

use crate::routes::Route;
use crate::views::{StatusView, ViewState, use_resolved_screen, view_state_from_resource};
use crate::vm::{TopicRowVm, map_topic_rows};

#[derive(Clone, Debug, PartialEq)]
struct TopicsData {
    title: String,
    /// Course name and its chapter list, when the chapter's course resolves.
    back: Option<(String, Route)>,
    rows: Vec<TopicRowVm>,
}

#[component]
pub fn TopicsView(chapter: Slug) -> Element {
    let resource = use_resolved_screen(Screen::Topics { chapter });
    let state = view_state_from_resource(&resource).narrow(|screen| match screen {
        ResolvedScreen::Topics {
            course,
            chapter,
            topics,
        } => Some(TopicsData {
            title: chapter.name_fa,
            back: course.map(|course| {
                (
                    course.name_fa,
                    Route::Chapters {
                        course: course.slug,
                    },
                )
            }),
            rows: map_topic_rows(&topics),
        }),
        _ => None,
    });

    rsx! {
        div { class: "page page--topics",
            match state {
                ViewState::Ready(data) => rsx! {
                    if let Some((course, route)) = data.back {
                        Link { class: "breadcrumb", to: route, "{course}" }
                    }
                    h2 { "{data.title}" }
                    if data.rows.is_empty() {
                        p { class: "empty", "No topics in this chapter yet." }
                    }
                    ul { class: "row-list",
                        for row in data.rows {
                            li { key: "{row.key}", class: "row",
                                span { class: "row__title", "{row.title}" }
                                Link { class: "button", to: row.study.clone(), "Study" }
                                Link { class: "button button--ghost", to: row.quiz.clone(), "Quiz" }
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
