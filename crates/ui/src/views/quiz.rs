use dioxus::prelude::*;
use prep_core::model::Slug;

use crate::context::AppContext;
use crate::views::attempt_panel::{AttemptPanel, use_attempt_dispatch};
use crate::views::{StatusView, ViewError, ViewState, view_state_from_resource};
use crate::vm::AttemptVm;

/// Quiz over a topic's questions, with the answer revealed after each pick.
#[component]
pub fn QuizView(topic: Slug) -> Element {
    let ctx = use_context::<AppContext>();
    let attempts = ctx.attempts();
    let vm = use_signal(|| None::<AttemptVm>);

    let resource = use_resource(use_reactive((&topic,), move |(topic,)| {
        let attempts = attempts.clone();
        let mut vm = vm;
        async move {
            let quiz = attempts
                .start_topic_quiz(topic.as_str())
                .await
                .map_err(|err| ViewError::from_attempt(&err))?;
            vm.set(Some(AttemptVm::topic_quiz(quiz.topic.name_fa, quiz.attempt)));
            Ok::<_, ViewError>(())
        }
    }));
    let dispatch = use_attempt_dispatch(vm);
    let state = view_state_from_resource(&resource);
    let current = vm.read().clone();

    rsx! {
        div { class: "page page--quiz",
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
