use dioxus::prelude::*;

use crate::views::NotFoundPanel;

/// Catch-all for paths outside the route table.
#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    log::debug!("no route for /{}", segments.join("/"));

    rsx! {
        div { class: "page page--not-found",
            NotFoundPanel {}
        }
    }
}
