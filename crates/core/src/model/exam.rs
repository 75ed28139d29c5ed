use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lookup::{EntityKind, Identified, Slugged};
use crate::model::ids::ExamId;
use crate::model::slug::Slug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamKind {
    PastYear,
    Authored,
    Comprehensive,
}

impl ExamKind {
    pub const ALL: [ExamKind; 3] = [
        ExamKind::PastYear,
        ExamKind::Authored,
        ExamKind::Comprehensive,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExamKind::PastYear => "Past-year exams",
            ExamKind::Authored => "Authored exams",
            ExamKind::Comprehensive => "Comprehensive exams",
        }
    }
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Standalone exam. `questions_count` and `duration_minutes` are informational;
/// the attempt engine runs over whatever question set is bound to the exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: ExamId,
    pub title: String,
    pub slug: Slug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    pub questions_count: u32,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub kind: ExamKind,
}

impl Identified for Exam {
    type Id = ExamId;
    const KIND: EntityKind = EntityKind::Exam;

    fn id(&self) -> ExamId {
        self.id
    }
}

impl Slugged for Exam {
    fn slug(&self) -> &Slug {
        &self.slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_shape() {
        let exam: Exam = serde_json::from_str(
            r#"{"id":3,"title":"Authored","slug":"inf-authored-1","questions_count":50,"duration":60,"type":"authored"}"#,
        )
        .unwrap();
        assert_eq!(exam.kind, ExamKind::Authored);
        assert_eq!(exam.duration_minutes, 60);
        assert_eq!(exam.year, None);
    }
}
