use std::sync::Arc;

use prep_core::Screen;
use prep_core::model::{
    AdvanceOutcome, Attempt, AttemptError, AttemptMode, Exam, ExamId, QuestionOwner, Topic,
};

use crate::catalog_service::CatalogService;
use crate::error::AttemptServiceError;
use crate::results_service::ResultsService;

/// A topic quiz ready to be answered.
#[derive(Debug, Clone)]
pub struct TopicQuiz {
    pub topic: Topic,
    pub attempt: Attempt,
}

/// An exam sitting ready to be answered.
#[derive(Debug, Clone)]
pub struct ExamSitting {
    pub exam: Exam,
    pub attempt: Attempt,
}

/// Result of stepping an attempt forward from a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still in progress; the view re-renders the attempt.
    Continue,
    /// The current position has no answer yet.
    Blocked,
    /// Finished; navigate to the results screen.
    Finished(Screen),
}

/// Starts attempts from catalog content and files finished ones on the results board.
#[derive(Clone)]
pub struct AttemptService {
    catalog: Arc<CatalogService>,
    results: Arc<ResultsService>,
}

impl AttemptService {
    #[must_use]
    pub fn new(catalog: Arc<CatalogService>, results: Arc<ResultsService>) -> Self {
        Self { catalog, results }
    }

    /// Start a quiz over the questions bound to the topic with `slug`.
    ///
    /// # Errors
    ///
    /// Returns `AttemptServiceError::Catalog` if the topic does not resolve and
    /// `AttemptServiceError::Empty` if it has no questions.
    pub async fn start_topic_quiz(&self, slug: &str) -> Result<TopicQuiz, AttemptServiceError> {
        let topic = self.catalog.topic_by_slug(slug).await?;
        let questions = self
            .catalog
            .questions_for(QuestionOwner::Topic(topic.id))
            .await?;
        let attempt = Attempt::new(AttemptMode::Quiz, questions).map_err(|err| match err {
            AttemptError::Empty => AttemptServiceError::Empty("topic"),
            other => AttemptServiceError::Attempt(other),
        })?;
        log::info!("starting quiz for topic {} ({} questions)", topic.slug, attempt.total());
        Ok(TopicQuiz { topic, attempt })
    }

    /// Start a sitting over the questions bound to exam `id`.
    ///
    /// # Errors
    ///
    /// Returns `AttemptServiceError::Catalog` if the exam does not resolve and
    /// `AttemptServiceError::Empty` if it has no questions.
    pub async fn start_exam(&self, id: ExamId) -> Result<ExamSitting, AttemptServiceError> {
        let exam = self.catalog.exam_by_id(id).await?;
        let questions = self
            .catalog
            .questions_for(QuestionOwner::Exam(exam.id))
            .await?;
        let attempt = Attempt::new(AttemptMode::Exam, questions).map_err(|err| match err {
            AttemptError::Empty => AttemptServiceError::Empty("exam"),
            other => AttemptServiceError::Attempt(other),
        })?;
        log::info!("starting exam {} ({} questions)", exam.id, attempt.total());
        Ok(ExamSitting { exam, attempt })
    }

    /// Advance `attempt`; on completion the summary is recorded and the results
    /// screen returned.
    ///
    /// `exam` is `None` for topic quizzes.
    pub fn step(&self, exam: Option<ExamId>, attempt: &mut Attempt) -> StepOutcome {
        match attempt.advance() {
            AdvanceOutcome::Moved { .. } | AdvanceOutcome::Finished => StepOutcome::Continue,
            AdvanceOutcome::NotAnswered => StepOutcome::Blocked,
            AdvanceOutcome::Completed(summary) => {
                StepOutcome::Finished(self.results.record(exam, summary))
            }
        }
    }
}
