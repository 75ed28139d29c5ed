use dioxus::prelude::*;
use prep_core::Screen;
use prep_core::model::Slug;
use services::ResolvedScreen;

use crate::views::cards::RowList;
use crate::views::{StatusView, ViewState, use_resolved_screen, view_state_from_resource};
use crate::vm::{RowVm, map_chapter_rows};

#[derive(Clone, Debug, PartialEq)]
struct ChaptersData {
    title: String,
    reference: String,
    rows: Vec<RowVm>,
}

#[component]
pub fn ChaptersView(course: Slug) -> Element {
    let resource = use_resolved_screen(Screen::Chapters { course });
    let state = view_state_from_resource(&resource).narrow(|screen| match screen {
        ResolvedScreen::Chapters { course, chapters } => Some(ChaptersData {
            title: course.name_fa,
            reference: course.main_reference,
            rows: map_chapter_rows(&chapters),
        }),
        _ => None,
    });

    rsx! {
        div { class: "page page--chapters",
            match state {
                ViewState::Ready(data) => rsx! {
                    h2 { "{data.title}" }
                    if !data.reference.is_empty() {
                        p { class: "lead", "{data.reference}" }
                    }
                    RowList { rows: data.rows, empty: "No chapters in this course yet." }
                },
                other => rsx! {
                    StatusView { state: other.status() }
                },
            }
        }
    }
}
