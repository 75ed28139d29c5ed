mod attempt;
mod catalog;
mod course;
mod exam;
mod ids;
mod question;
mod slug;
mod specialty;

pub use ids::{
    AttemptId, ChapterId, CourseId, ExamId, ExamLevelId, ParseIdError, QuestionId, SpecialtyId,
    SubspecialtyId, TopicId,
};
pub use slug::{Slug, SlugError};

pub use attempt::{
    AdvanceOutcome, AnswerState, Attempt, AttemptError, AttemptMode, AttemptProgress,
    AttemptState, AttemptSummary, QuestionOutcome, SelectOutcome,
};
pub use catalog::{Catalog, IntegrityIssue};
pub use course::{Chapter, Course, Topic};
pub use exam::{Exam, ExamKind};
pub use question::{Question, QuestionError, QuestionOwner, QuestionSet};
pub use specialty::{ExamLevel, Specialty, Subspecialty};
