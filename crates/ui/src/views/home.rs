use dioxus::prelude::*;
use prep_core::Screen;
use services::ResolvedScreen;

use crate::views::cards::EntryGrid;
use crate::views::{StatusView, ViewState, use_resolved_screen, view_state_from_resource};
use crate::vm::map_specialty_cards;

#[component]
pub fn HomeView() -> Element {
    let resource = use_resolved_screen(Screen::Home);
    let state = view_state_from_resource(&resource).narrow(|screen| match screen {
        ResolvedScreen::Home { specialties } => Some(map_specialty_cards(&specialties)),
        _ => None,
    });

    rsx! {
        div { class: "page page--home",
            h2 { "Choose your specialty" }
            match state {
                ViewState::Ready(cards) => rsx! {
                    EntryGrid { cards, empty: "No specialties are available yet." }
                },
                other => rsx! {
                    StatusView { state: other.status() }
                },
            }
        }
    }
}
