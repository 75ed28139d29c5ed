use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use prep_core::Screen;
use prep_core::model::{AttemptId, AttemptSummary, ExamId};

/// Exam id used in results paths for topic quizzes, which belong to no exam.
pub const QUIZ_RESULTS_EXAM: ExamId = ExamId::new(0);

/// Finished attempts kept before the oldest is evicted.
pub const DEFAULT_RESULTS_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
struct Recorded {
    exam: ExamId,
    summary: AttemptSummary,
}

/// In-process board of finished attempts, read back by the results screen.
///
/// Nothing is persisted; the board lives as long as the app context and holds at
/// most `capacity` attempts, dropping the oldest first.
#[derive(Debug)]
pub struct ResultsService {
    next_id: AtomicU64,
    capacity: usize,
    board: Mutex<HashMap<AttemptId, Recorded>>,
}

impl Default for ResultsService {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsService {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RESULTS_CAPACITY)
    }

    /// Board that keeps the latest `capacity` attempts (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            capacity: capacity.max(1),
            board: Mutex::new(HashMap::new()),
        }
    }

    fn board(&self) -> MutexGuard<'_, HashMap<AttemptId, Recorded>> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a finished attempt and return the screen that shows it.
    ///
    /// Pass `None` for topic quizzes.
    pub fn record(&self, exam: Option<ExamId>, summary: AttemptSummary) -> Screen {
        let exam = exam.unwrap_or(QUIZ_RESULTS_EXAM);
        let attempt = AttemptId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        log::info!(
            "recorded attempt {attempt} for exam {exam}: {}/{} correct",
            summary.correct,
            summary.total
        );
        let mut board = self.board();
        board.insert(attempt, Recorded { exam, summary });
        while board.len() > self.capacity {
            let Some(oldest) = board.keys().min().copied() else {
                break;
            };
            board.remove(&oldest);
            log::debug!("evicted attempt {oldest} from the results board");
        }
        Screen::ExamResults { exam, attempt }
    }

    /// The summary recorded for `attempt`, if it was recorded under `exam`.
    #[must_use]
    pub fn get(&self, exam: ExamId, attempt: AttemptId) -> Option<AttemptSummary> {
        self.board()
            .get(&attempt)
            .filter(|recorded| recorded.exam == exam)
            .map(|recorded| recorded.summary.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.board().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
