use dioxus::prelude::*;
use prep_core::Screen;
use prep_core::model::Slug;
use services::ResolvedScreen;

use crate::views::cards::EntryGrid;
use crate::views::{StatusView, ViewState, use_resolved_screen, view_state_from_resource};
use crate::vm::{EntryCardVm, map_level_cards};

#[derive(Clone, Debug, PartialEq)]
struct LevelsData {
    title: String,
    cards: Vec<EntryCardVm>,
}

/// Exam levels of one specialty. Picking a level either asks for a
/// subspecialty or goes straight to the level dashboard.
#[component]
pub fn LevelsView(specialty: Slug) -> Element {
    let resource = use_resolved_screen(Screen::Levels { specialty });
    let state = view_state_from_resource(&resource).narrow(|screen| match screen {
        ResolvedScreen::Levels { specialty, levels } => Some(LevelsData {
            title: specialty.name_fa,
            cards: map_level_cards(&levels),
        }),
        _ => None,
    });

    rsx! {
        div { class: "page page--levels",
            match state {
                ViewState::Ready(data) => rsx! {
                    h2 { "{data.title}" }
                    p { class: "lead", "Choose an exam level" }
                    EntryGrid { cards: data.cards, empty: "No exam levels for this specialty yet." }
                },
                other => rsx! {
                    StatusView { state: other.status() }
                },
            }
        }
    }
}
