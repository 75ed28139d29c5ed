use dioxus::prelude::*;
use prep_core::Screen;
use prep_core::model::Slug;
use services::ResolvedScreen;

use crate::views::cards::EntryGrid;
use crate::views::{StatusView, ViewState, use_resolved_screen, view_state_from_resource};
use crate::vm::{EntryCardVm, map_subspecialty_cards};

#[derive(Clone, Debug, PartialEq)]
struct SubspecialtiesData {
    trail: String,
    cards: Vec<EntryCardVm>,
}

#[component]
pub fn SubspecialtiesView(specialty: Slug, level: Slug) -> Element {
    let resource = use_resolved_screen(Screen::Subspecialties { specialty, level });
    let state = view_state_from_resource(&resource).narrow(|screen| match screen {
        ResolvedScreen::Subspecialties {
            specialty,
            level,
            subspecialties,
        } => Some(SubspecialtiesData {
            trail: format!("{} / {}", specialty.name_fa, level.name_fa),
            cards: map_subspecialty_cards(&specialty, &level.slug, &subspecialties),
        }),
        _ => None,
    });

    rsx! {
        div { class: "page page--subspecialties",
            match state {
                ViewState::Ready(data) => rsx! {
                    p { class: "breadcrumb", "{data.trail}" }
                    h2 { "Choose a subspecialty" }
                    EntryGrid { cards: data.cards, empty: "No subspecialties for this level yet." }
                },
                other => rsx! {
                    StatusView { state: other.status() }
                },
            }
        }
    }
}
