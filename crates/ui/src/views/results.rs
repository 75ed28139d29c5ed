use dioxus::prelude::*;
use dioxus_router::Link;
use prep_core::Screen;
use prep_core::model::{AttemptId, ExamId};
use services::ResolvedScreen;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{StatusView, ViewError, ViewState, view_state_from_resource};
use crate::vm::{ResultsVm, map_results};

#[derive(Clone, Debug, PartialEq)]
struct ResultsData {
    results: ResultsVm,
    retake: Option<Route>,
}

#[component]
pub fn ResultsView(exam_id: ExamId, attempt_id: AttemptId) -> Element {
    let ctx = use_context::<AppContext>();
    let navigation = ctx.navigation();
    let board = ctx.results();

    let resource = use_resource(use_reactive(
        (&exam_id, &attempt_id),
        move |(exam_id, attempt_id)| {
            let navigation = navigation.clone();
            let board = board.clone();
            async move {
                let screen = Screen::ExamResults {
                    exam: exam_id,
                    attempt: attempt_id,
                };
                let resolved = navigation
                    .resolve(&screen)
                    .await
                    .map_err(|err| ViewError::from_catalog(&err))?;
                let ResolvedScreen::ExamResults { exam, .. } = resolved else {
                    return Err(ViewError::Unknown);
                };
                let summary = board.get(exam_id, attempt_id).ok_or(ViewError::NotFound)?;
                Ok(ResultsData {
                    results: map_results(exam.as_ref(), &summary),
                    retake: exam.map(|exam| Route::ExamTake { exam_id: exam.id }),
                })
            }
        },
    ));
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page page--results",
            match state {
                ViewState::Ready(data) => rsx! {
                    ResultsCard { results: data.results }
                    footer { class: "results__actions",
                        if let Some(route) = data.retake {
                            Link { class: "button", to: route, "Retake exam" }
                        }
                        Link { class: "button button--ghost", to: Route::Home {}, "Back to home" }
                    }
                },
                other => rsx! {
                    StatusView { state: other.status() }
                },
            }
        }
    }
}

#[component]
fn ResultsCard(results: ResultsVm) -> Element {
    let verdict = if results.passed { "Passed" } else { "Keep practising" };
    let verdict_class = if results.passed {
        "verdict verdict--pass"
    } else {
        "verdict verdict--fail"
    };

    rsx! {
        section { class: "results",
            h2 { "{results.title}" }
            p { class: "results__score", "{results.percent_label}" }
            p { class: verdict_class, "{verdict}" }
            dl { class: "results__counts",
                dt { "Correct" }
                dd { "{results.correct} / {results.total}" }
                dt { "Wrong" }
                dd { "{results.wrong}" }
                dt { "Unanswered" }
                dd { "{results.unanswered}" }
            }
            if !results.review.is_empty() {
                h3 { "Review" }
                ol { class: "results__review",
                    for row in results.review {
                        li { key: "{row.number}",
                            span { class: "review__number", "#{row.number}" }
                            span { class: "review__prompt", "{row.prompt}" }
                            span { class: "review__verdict", "{row.verdict}" }
                        }
                    }
                }
            }
        }
    }
}
