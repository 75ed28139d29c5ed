use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("an attempt needs at least one question")]
    Empty,
}

//
// ─── STATES ────────────────────────────────────────────────────────────────────
//

/// Topic quizzes reveal feedback after every answer; exams allow moving back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttemptMode {
    Quiz,
    Exam,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptState {
    InProgress,
    Completed,
}

/// Sub-state of a single position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Answered(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Recorded { correct: bool },
    /// The position already holds an answer; nothing changed.
    AlreadyAnswered,
    OptionOutOfRange,
    /// The attempt is completed; nothing changed.
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Moved { position: usize },
    /// Returned exactly once, on the transition into `Completed`.
    Completed(AttemptSummary),
    /// The current position has no answer yet.
    NotAnswered,
    /// Already completed; position is unchanged.
    Finished,
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub question_id: QuestionId,
    pub prompt: String,
    pub chosen: Option<usize>,
    pub correct_index: usize,
}

impl QuestionOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.chosen == Some(self.correct_index)
    }

    #[must_use]
    pub fn is_wrong(&self) -> bool {
        matches!(self.chosen, Some(chosen) if chosen != self.correct_index)
    }
}

/// Terminal score summary carried to the results screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub mode: AttemptMode,
    pub total: u32,
    pub correct: u32,
    pub wrong: u32,
    pub unanswered: u32,
    pub outcomes: Vec<QuestionOutcome>,
}

impl AttemptSummary {
    /// Correct answers as a whole percentage of all questions, rounded half up.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 100 + self.total / 2) / self.total
    }

    /// Outcomes that did not score, with their position in the attempt.
    pub fn missed(&self) -> impl Iterator<Item = (usize, &QuestionOutcome)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, outcome)| !outcome.is_correct())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptProgress {
    pub position: usize,
    pub answered: usize,
    pub total: usize,
}

impl AttemptProgress {
    /// Answered share in whole percent, for progress bars.
    #[must_use]
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.answered * 100 / self.total
    }
}

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

/// One pass through an ordered question sequence.
///
/// Answers are write-once per position and the correct count is updated at the
/// moment of the first selection, so it always agrees with the recorded answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    mode: AttemptMode,
    questions: Vec<Question>,
    position: usize,
    furthest: usize,
    answers: BTreeMap<usize, usize>,
    correct: u32,
    revealed: bool,
    state: AttemptState,
}

impl Attempt {
    /// Starts an attempt at position 0 with no answers.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::Empty` if `questions` is empty.
    pub fn new(mode: AttemptMode, questions: Vec<Question>) -> Result<Self, AttemptError> {
        if questions.is_empty() {
            return Err(AttemptError::Empty);
        }
        Ok(Self {
            mode,
            questions,
            position: 0,
            furthest: 0,
            answers: BTreeMap::new(),
            correct: 0,
            revealed: false,
            state: AttemptState::InProgress,
        })
    }

    #[must_use]
    pub fn mode(&self) -> AttemptMode {
        self.mode
    }

    #[must_use]
    pub fn state(&self) -> AttemptState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == AttemptState::Completed
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Highest position reached so far.
    #[must_use]
    pub fn furthest(&self) -> usize {
        self.furthest
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.position + 1 == self.questions.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.position]
    }

    /// Recorded answers keyed by position.
    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, usize> {
        &self.answers
    }

    #[must_use]
    pub fn answer_state(&self, position: usize) -> AnswerState {
        match self.answers.get(&position) {
            Some(choice) => AnswerState::Answered(*choice),
            None => AnswerState::Unanswered,
        }
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(&self.position).copied()
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    /// Whether correctness feedback for the current position is showing.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.mode == AttemptMode::Exam && self.position > 0 && !self.is_complete()
    }

    #[must_use]
    pub fn progress(&self) -> AttemptProgress {
        AttemptProgress {
            position: self.position,
            answered: self.answers.len(),
            total: self.questions.len(),
        }
    }

    /// Records `option_index` for the current position if it is still unanswered.
    pub fn select_option(&mut self, option_index: usize) -> SelectOutcome {
        if self.is_complete() {
            return SelectOutcome::Finished;
        }
        if self.answers.contains_key(&self.position) {
            return SelectOutcome::AlreadyAnswered;
        }
        let question = &self.questions[self.position];
        if option_index >= question.options().len() {
            return SelectOutcome::OptionOutOfRange;
        }

        let correct = question.is_correct(option_index);
        self.answers.insert(self.position, option_index);
        if correct {
            self.correct += 1;
        }
        if self.mode == AttemptMode::Quiz {
            self.revealed = true;
        }
        log::debug!(
            "attempt: position {} answered with {option_index} (correct: {correct})",
            self.position
        );
        SelectOutcome::Recorded { correct }
    }

    /// Moves past an answered position, completing the attempt on the last one.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.is_complete() {
            return AdvanceOutcome::Finished;
        }
        if !self.answers.contains_key(&self.position) {
            return AdvanceOutcome::NotAnswered;
        }

        if self.is_last() {
            self.state = AttemptState::Completed;
            self.revealed = false;
            log::debug!(
                "attempt: completed with {}/{} correct",
                self.correct,
                self.questions.len()
            );
            return AdvanceOutcome::Completed(self.summary());
        }

        self.position += 1;
        self.furthest = self.furthest.max(self.position);
        self.revealed = false;
        AdvanceOutcome::Moved {
            position: self.position,
        }
    }

    /// Steps back one position in exam mode. Answers are left untouched.
    ///
    /// Returns `false` (and does nothing) at position 0, in quiz mode, or once completed.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Jumps to an already reached position in exam mode.
    pub fn jump_to(&mut self, position: usize) -> bool {
        if self.mode != AttemptMode::Exam || self.is_complete() || position > self.furthest {
            return false;
        }
        self.position = position;
        true
    }

    /// Score summary of the answers recorded so far.
    #[must_use]
    pub fn summary(&self) -> AttemptSummary {
        let outcomes: Vec<QuestionOutcome> = self
            .questions
            .iter()
            .enumerate()
            .map(|(position, question)| QuestionOutcome {
                question_id: question.id(),
                prompt: question.text().to_string(),
                chosen: self.answers.get(&position).copied(),
                correct_index: question.correct_index(),
            })
            .collect();

        let count = |pred: fn(&QuestionOutcome) -> bool| {
            u32::try_from(outcomes.iter().filter(|o| pred(o)).count()).unwrap_or(u32::MAX)
        };
        let wrong = count(QuestionOutcome::is_wrong);
        let unanswered = count(|o| o.chosen.is_none());

        AttemptSummary {
            mode: self.mode,
            total: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
            correct: self.correct,
            wrong,
            unanswered,
            outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, correct_index: usize) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Question {id}"),
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index,
            "explanation",
            "source",
        )
        .unwrap()
    }

    fn attempt(mode: AttemptMode, correct: &[usize]) -> Attempt {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(i, c)| question(i as u64 + 1, *c))
            .collect();
        Attempt::new(mode, questions).unwrap()
    }

    #[test]
    fn empty_attempt_is_rejected() {
        assert_eq!(
            Attempt::new(AttemptMode::Quiz, Vec::new()),
            Err(AttemptError::Empty)
        );
    }

    #[test]
    fn starts_at_position_zero_unanswered() {
        let a = attempt(AttemptMode::Quiz, &[1, 2]);
        assert_eq!(a.position(), 0);
        assert!(a.answers().is_empty());
        assert_eq!(a.answer_state(0), AnswerState::Unanswered);
        assert_eq!(a.state(), AttemptState::InProgress);
        assert!(!a.is_revealed());
    }

    #[test]
    fn two_question_quiz_scores_one_of_two() {
        let mut a = attempt(AttemptMode::Quiz, &[1, 2]);

        assert_eq!(a.select_option(1), SelectOutcome::Recorded { correct: true });
        assert!(a.is_revealed());
        assert_eq!(a.advance(), AdvanceOutcome::Moved { position: 1 });
        assert!(!a.is_revealed());

        assert_eq!(a.select_option(0), SelectOutcome::Recorded { correct: false });
        let AdvanceOutcome::Completed(summary) = a.advance() else {
            panic!("expected completion");
        };

        assert_eq!(summary.correct, 1);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.wrong, 1);
        assert_eq!(summary.unanswered, 0);
        assert_eq!(summary.percent(), 50);
        let answers: Vec<_> = a.answers().iter().map(|(p, c)| (*p, *c)).collect();
        assert_eq!(answers, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn reselecting_is_a_no_op() {
        let mut a = attempt(AttemptMode::Quiz, &[1, 2]);
        assert_eq!(a.select_option(0), SelectOutcome::Recorded { correct: false });
        assert_eq!(a.select_option(0), SelectOutcome::AlreadyAnswered);
        assert_eq!(a.select_option(1), SelectOutcome::AlreadyAnswered);

        assert_eq!(a.answers().get(&0), Some(&0));
        assert_eq!(a.answers().len(), 1);
        assert_eq!(a.correct_count(), 0);
    }

    #[test]
    fn correct_answer_counts_once_even_if_clicked_again() {
        let mut a = attempt(AttemptMode::Quiz, &[2]);
        a.select_option(2);
        a.select_option(2);
        assert_eq!(a.correct_count(), 1);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut a = attempt(AttemptMode::Quiz, &[0]);
        assert_eq!(a.select_option(9), SelectOutcome::OptionOutOfRange);
        assert_eq!(a.answer_state(0), AnswerState::Unanswered);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut a = attempt(AttemptMode::Exam, &[0, 1]);
        assert_eq!(a.advance(), AdvanceOutcome::NotAnswered);
        assert_eq!(a.position(), 0);
    }

    #[test]
    fn completion_is_signalled_exactly_once() {
        let mut a = attempt(AttemptMode::Quiz, &[0]);
        a.select_option(0);
        assert!(matches!(a.advance(), AdvanceOutcome::Completed(_)));
        assert_eq!(a.advance(), AdvanceOutcome::Finished);
        assert_eq!(a.advance(), AdvanceOutcome::Finished);
        assert_eq!(a.position(), 0);
        assert!(a.is_complete());
        assert_eq!(a.select_option(1), SelectOutcome::Finished);
    }

    #[test]
    fn retreat_at_start_is_a_no_op() {
        let mut a = attempt(AttemptMode::Exam, &[0, 1]);
        assert!(!a.retreat());
        assert_eq!(a.position(), 0);
    }

    #[test]
    fn retreat_keeps_recorded_answers() {
        let mut a = attempt(AttemptMode::Exam, &[0, 1]);
        a.select_option(3);
        a.advance();
        assert!(a.retreat());
        assert_eq!(a.position(), 0);
        assert_eq!(a.current_answer(), Some(3));
        assert_eq!(a.select_option(0), SelectOutcome::AlreadyAnswered);
        assert_eq!(a.correct_count(), 0);
    }

    #[test]
    fn quiz_mode_cannot_retreat_or_jump() {
        let mut a = attempt(AttemptMode::Quiz, &[0, 1]);
        a.select_option(0);
        a.advance();
        assert!(!a.retreat());
        assert!(!a.jump_to(0));
        assert_eq!(a.position(), 1);
    }

    #[test]
    fn exam_mode_does_not_reveal_feedback() {
        let mut a = attempt(AttemptMode::Exam, &[0, 1]);
        a.select_option(0);
        assert!(!a.is_revealed());
    }

    #[test]
    fn jump_is_limited_to_reached_positions() {
        let mut a = attempt(AttemptMode::Exam, &[0, 1, 2]);
        assert!(!a.jump_to(1));
        a.select_option(0);
        a.advance();
        a.select_option(1);
        a.advance();
        assert_eq!(a.furthest(), 2);
        assert!(a.jump_to(0));
        assert_eq!(a.position(), 0);
        assert!(a.jump_to(2));
        assert!(!a.jump_to(3));
    }

    #[test]
    fn score_matches_recorded_answers() {
        let correct = [0, 1, 2, 3, 1];
        let picks = [0, 2, 2, 0, 1];
        let mut a = attempt(AttemptMode::Quiz, &correct);
        let mut last = None;
        for pick in picks {
            a.select_option(pick);
            a.select_option((pick + 1) % 4);
            last = Some(a.advance());
        }
        let Some(AdvanceOutcome::Completed(summary)) = last else {
            panic!("expected completion");
        };
        let expected = a
            .answers()
            .iter()
            .filter(|(p, c)| a.questions()[**p].correct_index() == **c)
            .count();
        assert_eq!(summary.correct as usize, expected);
        assert_eq!(summary.correct, 3);
    }

    #[test]
    fn partial_summary_counts_unanswered() {
        let mut a = attempt(AttemptMode::Exam, &[0, 1, 2]);
        a.select_option(1);
        let summary = a.summary();
        assert_eq!(summary.correct, 0);
        assert_eq!(summary.wrong, 1);
        assert_eq!(summary.unanswered, 2);
        let missed: Vec<_> = summary.missed().map(|(p, o)| (p, o.is_wrong())).collect();
        assert_eq!(missed, vec![(0, true), (1, false), (2, false)]);
        assert_eq!(a.progress().percent(), 33);
    }

    #[test]
    fn percent_rounds_half_up() {
        let summary = AttemptSummary {
            mode: AttemptMode::Exam,
            total: 3,
            correct: 2,
            wrong: 1,
            unanswered: 0,
            outcomes: Vec::new(),
        };
        assert_eq!(summary.percent(), 67);
    }
}
