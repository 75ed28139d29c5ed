use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

/// Window title and navbar brand.
pub const APP_TITLE: &str = "Exam Prep";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{APP_TITLE}" }

        div { class: "app-root", lang: "fa",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    FatalError { report: format!("{errors:?}") }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Last-resort screen when a view panics or returns an error outside its own state.
#[component]
fn FatalError(report: String) -> Element {
    log::error!("unrecoverable view error: {report}");

    rsx! {
        div { class: "fatal",
            h1 { "Something went wrong" }
            p { "Restart the app to continue studying." }
            details {
                summary { "Details" }
                pre { "{report}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_error_shows_restart_hint_and_details() {
        let mut dom = VirtualDom::new_with_props(
            FatalError,
            FatalErrorProps {
                report: "catalog view failed".into(),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Restart the app to continue studying."), "{html}");
        assert!(html.contains("catalog view failed"), "{html}");
    }
}
