use dioxus::prelude::*;
use dioxus_router::Link;
use prep_core::Screen;
use prep_core::model::Slug;
use services::ResolvedScreen;

use crate::routes::Route;
use crate::views::{StatusView, ViewState, use_resolved_screen, view_state_from_resource};
use crate::vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq)]
struct StudyData {
    title: String,
    html: String,
    question_count: usize,
    quiz: Route,
}

#[component]
pub fn StudyView(topic: Slug) -> Element {
    let resource = use_resolved_screen(Screen::TopicStudy { topic });
    let state = view_state_from_resource(&resource).narrow(|screen| match screen {
        ResolvedScreen::TopicStudy {
            topic,
            question_count,
        } => Some(StudyData {
            html: markdown_to_html(&topic.content),
            title: topic.name_fa,
            question_count,
            quiz: Route::TopicQuiz { topic: topic.slug },
        }),
        _ => None,
    });

    rsx! {
        div { class: "page page--study",
            match state {
                ViewState::Ready(data) => rsx! {
                    h2 { "{data.title}" }
                    if data.html.is_empty() {
                        p { class: "empty", "Study notes for this topic are not written yet." }
                    } else {
                        article { class: "markdown", dangerous_inner_html: "{data.html}" }
                    }
                    footer { class: "study-footer",
                        if data.question_count > 0 {
                            Link { class: "button", to: data.quiz,
                                "Start quiz ({data.question_count} questions)"
                            }
                        } else {
                            p { class: "muted", "No quiz for this topic yet." }
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
