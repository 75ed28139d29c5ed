use dioxus::prelude::*;
use prep_core::model::ExamId;

use crate::context::AppContext;
use crate::views::attempt_panel::{AttemptPanel, use_attempt_dispatch};
use crate::views::{StatusView, ViewError, ViewState, view_state_from_resource};
use crate::vm::AttemptVm;

/// Timed-exam sitting: answers stay hidden and any reached question can be revisited.
#[component]
pub fn ExamView(exam_id: ExamId) -> Element {
    let ctx = use_context::<AppContext>();
    let attempts = ctx.attempts();
    let vm = use_signal(|| None::<AttemptVm>);

    let resource = use_resource(use_reactive((&exam_id,), move |(exam_id,)| {
        let attempts = attempts.clone();
        let mut vm = vm;
        async move {
            let sitting = attempts
                .start_exam(exam_id)
                .await
                .map_err(|err| ViewError::from_attempt(&err))?;
            vm.set(Some(AttemptVm::exam(
                sitting.exam.id,
                sitting.exam.title,
                sitting.exam.duration_minutes,
                sitting.attempt,
            )));
            Ok::<_, ViewError>(())
        }
    }));
    let dispatch = use_attempt_dispatch(vm);
    let state = view_state_from_resource(&resource);
    let current = vm.read().clone();

    rsx! {
        div { class: "page page--exam",
            match (state, current) {
                (ViewState::Ready(()), Some(vm)) => rsx! {
                    AttemptPanel { vm, dispatch }
                },
                (state, _) => rsx! {
                    StatusView { state }
                },
            }
        }
    }
}
