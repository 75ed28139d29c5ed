use prep_core::model::{AnswerState, Attempt, AttemptMode, ExamId, SelectOutcome};
use services::{AttemptService, StepOutcome};

use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptIntent {
    Select(usize),
    Advance,
    Retreat,
    JumpTo(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum AttemptOutcome {
    Continue,
    Finished(Route),
}

/// Visual state of one answer option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    Idle,
    Selected,
    Correct,
    Wrong,
    Muted,
}

impl OptionTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionTone::Idle => "option",
            OptionTone::Selected => "option option--selected",
            OptionTone::Correct => "option option--correct",
            OptionTone::Wrong => "option option--wrong",
            OptionTone::Muted => "option option--muted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: char,
    pub text: String,
    pub tone: OptionTone,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub explanation: String,
    pub source: String,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.correct {
            "feedback feedback--correct"
        } else {
            "feedback feedback--wrong"
        }
    }

    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.correct { "Correct!" } else { "Not quite." }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavCellVm {
    pub position: usize,
    pub number: usize,
    pub answered: bool,
    pub current: bool,
    pub reachable: bool,
}

impl NavCellVm {
    #[must_use]
    pub fn class(self) -> &'static str {
        if self.current {
            "cell cell--current"
        } else if self.answered {
            "cell cell--answered"
        } else {
            "cell"
        }
    }
}

const OPTION_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Owns one attempt for the lifetime of a quiz or exam screen.
#[derive(Clone, Debug, PartialEq)]
pub struct AttemptVm {
    attempt: Attempt,
    exam: Option<ExamId>,
    title: String,
    duration_minutes: Option<u32>,
}

impl AttemptVm {
    #[must_use]
    pub fn topic_quiz(title: String, attempt: Attempt) -> Self {
        Self {
            attempt,
            exam: None,
            title,
            duration_minutes: None,
        }
    }

    #[must_use]
    pub fn exam(exam: ExamId, title: String, duration_minutes: u32, attempt: Attempt) -> Self {
        Self {
            attempt,
            exam: Some(exam),
            title,
            duration_minutes: Some(duration_minutes),
        }
    }

    #[must_use]
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration_minutes
    }

    #[must_use]
    pub fn is_exam(&self) -> bool {
        self.attempt.mode() == AttemptMode::Exam
    }

    #[must_use]
    pub fn question_text(&self) -> &str {
        self.attempt.current_question().text()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "Question {} of {}",
            self.attempt.position() + 1,
            self.attempt.total()
        )
    }

    #[must_use]
    pub fn progress_percent(&self) -> usize {
        self.attempt.progress().percent()
    }

    #[must_use]
    pub fn options(&self) -> Vec<OptionVm> {
        let question = self.attempt.current_question();
        let chosen = self.attempt.current_answer();
        let revealed = self.attempt.is_revealed();

        question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let tone = match (chosen, revealed) {
                    (None, _) => OptionTone::Idle,
                    (Some(_), true) if question.is_correct(index) => OptionTone::Correct,
                    (Some(choice), true) if choice == index => OptionTone::Wrong,
                    (Some(_), true) => OptionTone::Muted,
                    (Some(choice), false) if choice == index => OptionTone::Selected,
                    (Some(_), false) => OptionTone::Idle,
                };
                OptionVm {
                    index,
                    label: OPTION_LABELS.get(index).copied().unwrap_or('?'),
                    text: text.clone(),
                    tone,
                    disabled: chosen.is_some(),
                }
            })
            .collect()
    }

    /// Explanation shown after answering a quiz question.
    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        if !self.attempt.is_revealed() {
            return None;
        }
        let question = self.attempt.current_question();
        let chosen = self.attempt.current_answer()?;
        Some(FeedbackVm {
            correct: question.is_correct(chosen),
            explanation: question.explanation().to_string(),
            source: question.source().to_string(),
        })
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.attempt.is_complete() && self.attempt.current_answer().is_some()
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.attempt.can_retreat()
    }

    #[must_use]
    pub fn advance_label(&self) -> &'static str {
        if self.attempt.is_last() {
            "Finish"
        } else {
            "Next"
        }
    }

    /// Question strip for exams; empty for quizzes.
    #[must_use]
    pub fn nav_cells(&self) -> Vec<NavCellVm> {
        if !self.is_exam() {
            return Vec::new();
        }
        (0..self.attempt.total())
            .map(|position| NavCellVm {
                position,
                number: position + 1,
                answered: self.attempt.answer_state(position) != AnswerState::Unanswered,
                current: position == self.attempt.position(),
                reachable: position <= self.attempt.furthest(),
            })
            .collect()
    }

    pub fn apply(&mut self, intent: AttemptIntent, attempts: &AttemptService) -> AttemptOutcome {
        match intent {
            AttemptIntent::Select(index) => {
                if let SelectOutcome::OptionOutOfRange = self.attempt.select_option(index) {
                    log::warn!("option {index} is out of range");
                }
                AttemptOutcome::Continue
            }
            AttemptIntent::Advance => match attempts.step(self.exam, &mut self.attempt) {
                StepOutcome::Finished(screen) => AttemptOutcome::Finished(Route::from(&screen)),
                StepOutcome::Continue | StepOutcome::Blocked => AttemptOutcome::Continue,
            },
            AttemptIntent::Retreat => {
                self.attempt.retreat();
                AttemptOutcome::Continue
            }
            AttemptIntent::JumpTo(position) => {
                self.attempt.jump_to(position);
                AttemptOutcome::Continue
            }
        }
    }
}
