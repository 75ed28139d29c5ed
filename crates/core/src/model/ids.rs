use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for parsing an ID from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the underlying u64 value
            #[must_use]
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map(Self::new).map_err(|_| ParseIdError {
                    kind: stringify!($name),
                })
            }
        }
    };
}

catalog_id!(
    /// Unique identifier for a Specialty
    SpecialtyId
);
catalog_id!(
    /// Unique identifier for an exam level within a specialty
    ExamLevelId
);
catalog_id!(
    /// Unique identifier for a Subspecialty
    SubspecialtyId
);
catalog_id!(
    /// Unique identifier for a Course
    CourseId
);
catalog_id!(
    /// Unique identifier for a Chapter
    ChapterId
);
catalog_id!(
    /// Unique identifier for a Topic
    TopicId
);
catalog_id!(
    /// Unique identifier for an Exam. `0` is reserved for topic quizzes on the results route.
    ExamId
);
catalog_id!(
    /// Unique identifier for a Question
    QuestionId
);
catalog_id!(
    /// Identifier handed out when a finished attempt is registered for the results screen
    AttemptId
);

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exam_id_display() {
        let id = ExamId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "ExamId(42)");
    }

    #[test]
    fn attempt_id_from_str() {
        let id: AttemptId = "123".parse().unwrap();
        assert_eq!(id, AttemptId::new(123));
    }

    #[test]
    fn id_from_str_invalid() {
        let err = "attempt-one".parse::<AttemptId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse AttemptId from string");
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&TopicId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: TopicId = serde_json::from_str("7").unwrap();
        assert_eq!(back, TopicId::new(7));
    }
}
