#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::vm::{AttemptIntent, AttemptOutcome, AttemptVm, format_countdown};

/// Intent dispatcher shared by the quiz and exam screens.
///
/// The attempt lives in `vm`; finishing navigates to the results screen.
pub(crate) fn use_attempt_dispatch(vm: Signal<Option<AttemptVm>>) -> Callback<AttemptIntent> {
    let ctx = use_context::<AppContext>();
    let attempts = ctx.attempts();
    let navigator = use_navigator();

    let dispatch = use_callback(move |intent: AttemptIntent| {
        let mut vm = vm;
        let outcome = match vm.write().as_mut() {
            Some(current) => current.apply(intent, &attempts),
            None => return,
        };
        if let AttemptOutcome::Finished(route) = outcome {
            log::debug!("attempt finished, opening {route}");
            if let Some(err) = navigator.push(route) {
                log::warn!("could not open the results screen: {err:?}");
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AttemptTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    dispatch
}

#[component]
pub(crate) fn AttemptPanel(vm: AttemptVm, dispatch: Callback<AttemptIntent>) -> Element {
    let options = vm.options();
    let feedback = vm.feedback();
    let cells = vm.nav_cells();
    let can_advance = vm.can_advance();
    let can_retreat = vm.can_retreat();
    let advance_label = vm.advance_label();
    let progress = vm.progress_percent();
    let countdown = vm.duration_minutes().map(format_countdown);

    rsx! {
        section { class: "attempt",
            header { class: "attempt__header",
                h2 { "{vm.title()}" }
                if let Some(countdown) = countdown {
                    span { class: "attempt__clock", "{countdown}" }
                }
            }
            div { class: "attempt__progress",
                span { "{vm.progress_label()}" }
                div { class: "progress-bar",
                    div { class: "progress-bar__fill", style: "width: {progress}%" }
                }
            }

            if !cells.is_empty() {
                nav { class: "question-strip",
                    for cell in cells {
                        button {
                            key: "{cell.position}",
                            r#type: "button",
                            class: cell.class(),
                            disabled: !cell.reachable,
                            onclick: move |_| dispatch.call(AttemptIntent::JumpTo(cell.position)),
                            "{cell.number}"
                        }
                    }
                }
            }

            p { class: "attempt__question", "{vm.question_text()}" }
            ul { class: "attempt__options",
                for option in options {
                    li { key: "{option.index}",
                        button {
                            r#type: "button",
                            class: option.tone.class(),
                            disabled: option.disabled,
                            onclick: move |_| dispatch.call(AttemptIntent::Select(option.index)),
                            span { class: "option__label", "{option.label}" }
                            span { class: "option__text", "{option.text}" }
                        }
                    }
                }
            }

            if let Some(feedback) = feedback {
                div { class: feedback.class(),
                    strong { "{feedback.verdict()}" }
                    if !feedback.explanation.is_empty() {
                        p { "{feedback.explanation}" }
                    }
                    if !feedback.source.is_empty() {
                        p { class: "feedback__source", "Source: {feedback.source}" }
                    }
                }
            }

            footer { class: "attempt__footer",
                if can_retreat {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| dispatch.call(AttemptIntent::Retreat),
                        "Previous"
                    }
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: !can_advance,
                    onclick: move |_| dispatch.call(AttemptIntent::Advance),
                    "{advance_label}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AttemptTestHandles {
    dispatch: Rc<RefCell<Option<Callback<AttemptIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<AttemptVm>>>>>,
}

#[cfg(test)]
impl AttemptTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<AttemptIntent>,
        vm: Signal<Option<AttemptVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<AttemptIntent> {
        (*self.dispatch.borrow()).expect("attempt dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<AttemptVm>> {
        (*self.vm.borrow()).expect("attempt vm registered")
    }
}
