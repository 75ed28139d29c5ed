use dioxus::prelude::*;
use prep_core::Screen;
use services::{AttemptServiceError, CatalogServiceError, ResolvedScreen};

use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotFound,
    EmptyQuiz,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NotFound => "Page not found.",
            ViewError::EmptyQuiz => "No questions are available here yet.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }

    #[must_use]
    pub fn from_catalog(err: &CatalogServiceError) -> Self {
        if err.is_not_found() {
            ViewError::NotFound
        } else {
            log::error!("catalog error: {err}");
            ViewError::Unknown
        }
    }

    #[must_use]
    pub fn from_attempt(err: &AttemptServiceError) -> Self {
        match err {
            AttemptServiceError::Empty(_) => ViewError::EmptyQuiz,
            AttemptServiceError::Catalog(err) => Self::from_catalog(err),
            other => {
                log::error!("attempt error: {other}");
                ViewError::Unknown
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// Resolve `screen` through the navigation service, re-running when it changes.
pub fn use_resolved_screen(screen: Screen) -> Resource<Result<ResolvedScreen, ViewError>> {
    let ctx = use_context::<AppContext>();
    let navigation = ctx.navigation();

    use_resource(use_reactive((&screen,), move |(screen,)| {
        let navigation = navigation.clone();
        async move {
            navigation
                .resolve(&screen)
                .await
                .map_err(|err| ViewError::from_catalog(&err))
        }
    }))
}

/// Shared rendering of the non-ready states.
#[component]
pub fn StatusView(state: ViewState<()>) -> Element {
    match state {
        ViewState::Idle => rsx! {
            p { "Idle" }
        },
        ViewState::Loading => rsx! {
            p { class: "loading", "Loading..." }
        },
        ViewState::Ready(()) => rsx! {},
        ViewState::Error(ViewError::NotFound) => rsx! {
            NotFoundPanel {}
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
    }
}

#[component]
pub fn NotFoundPanel() -> Element {
    let message = ViewError::NotFound.message();
    rsx! {
        div { class: "not-found",
            h2 { "Not found" }
            p { "{message}" }
            dioxus_router::Link { to: crate::routes::Route::Home {}, "Back to home" }
        }
    }
}

impl<T> ViewState<T> {
    /// Drop the payload so the shared status view can render the other states.
    #[must_use]
    pub fn status(&self) -> ViewState<()> {
        match self {
            ViewState::Idle => ViewState::Idle,
            ViewState::Loading => ViewState::Loading,
            ViewState::Ready(_) => ViewState::Ready(()),
            ViewState::Error(err) => ViewState::Error(*err),
        }
    }

    /// Keep the ready payload only if `pick` recognises it.
    #[must_use]
    pub fn narrow<U>(self, pick: impl FnOnce(T) -> Option<U>) -> ViewState<U> {
        match self {
            ViewState::Idle => ViewState::Idle,
            ViewState::Loading => ViewState::Loading,
            ViewState::Ready(data) => match pick(data) {
                Some(data) => ViewState::Ready(data),
                None => {
                    log::error!("resolved screen does not match the mounted view");
                    ViewState::Error(ViewError::Unknown)
                }
            },
            ViewState::Error(err) => ViewState::Error(err),
        }
    }
}
