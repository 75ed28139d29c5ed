use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lookup::{EntityKind, Identified, Slugged, find_by_id};
use crate::model::course::{Chapter, Course, Topic};
use crate::model::exam::Exam;
use crate::model::question::{Question, QuestionOwner, QuestionSet};
use crate::model::specialty::{ExamLevel, Specialty, Subspecialty};

/// Complete static content, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub specialties: Vec<Specialty>,
    pub exam_levels: Vec<ExamLevel>,
    pub subspecialties: Vec<Subspecialty>,
    pub courses: Vec<Course>,
    pub chapters: Vec<Chapter>,
    pub topics: Vec<Topic>,
    pub exams: Vec<Exam>,
    pub questions: Vec<Question>,
    pub question_sets: Vec<QuestionSet>,
}

/// Data-integrity finding reported by `Catalog::validate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntegrityIssue {
    DuplicateSlug { kind: EntityKind, slug: String },
    DuplicateId { kind: EntityKind, id: String },
    DanglingParent {
        kind: EntityKind,
        id: String,
        parent: EntityKind,
        parent_id: String,
    },
    UnknownQuestion { owner: QuestionOwner, question_id: String },
    UnknownOwner { owner: QuestionOwner },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::DuplicateSlug { kind, slug } => {
                write!(f, "duplicate {kind} slug {slug:?}")
            }
            IntegrityIssue::DuplicateId { kind, id } => write!(f, "duplicate {kind} id {id}"),
            IntegrityIssue::DanglingParent {
                kind,
                id,
                parent,
                parent_id,
            } => write!(f, "{kind} {id} references missing {parent} {parent_id}"),
            IntegrityIssue::UnknownQuestion { owner, question_id } => {
                write!(f, "question set {owner:?} references missing question {question_id}")
            }
            IntegrityIssue::UnknownOwner { owner } => {
                write!(f, "question set owner {owner:?} does not exist")
            }
        }
    }
}

impl Catalog {
    /// Questions bound to `owner`, in set order. Unknown ids are skipped.
    #[must_use]
    pub fn questions_for(&self, owner: QuestionOwner) -> Vec<&Question> {
        self.question_sets
            .iter()
            .filter(|set| set.owner == owner)
            .flat_map(|set| set.questions.iter())
            .filter_map(|id| find_by_id(&self.questions, *id))
            .collect()
    }

    /// Checks slug/id uniqueness and parent references.
    ///
    /// `Chapter::topics_count` is declared metadata and is deliberately not compared
    /// against the topic collection.
    #[must_use]
    pub fn validate(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        check_unique(&self.specialties, &mut issues);
        check_unique(&self.exam_levels, &mut issues);
        check_unique(&self.subspecialties, &mut issues);
        check_unique(&self.courses, &mut issues);
        check_unique(&self.chapters, &mut issues);
        check_unique(&self.topics, &mut issues);
        check_unique(&self.exams, &mut issues);
        check_unique_ids(&self.questions, &mut issues);

        for level in &self.exam_levels {
            check_parent(level, &self.specialties, level.specialty_id, &mut issues);
        }
        for sub in &self.subspecialties {
            check_parent(sub, &self.specialties, sub.specialty_id, &mut issues);
            check_parent(sub, &self.exam_levels, sub.exam_level_id, &mut issues);
        }
        for course in &self.courses {
            check_parent(course, &self.specialties, course.specialty_id, &mut issues);
            check_parent(course, &self.exam_levels, course.exam_level_id, &mut issues);
            if let Some(sub_id) = course.subspecialty_id {
                check_parent(course, &self.subspecialties, sub_id, &mut issues);
            }
        }
        for chapter in &self.chapters {
            check_parent(chapter, &self.courses, chapter.course_id, &mut issues);
        }
        for topic in &self.topics {
            check_parent(topic, &self.chapters, topic.chapter_id, &mut issues);
        }

        for set in &self.question_sets {
            let owner_exists = match set.owner {
                QuestionOwner::Topic(id) => find_by_id(&self.topics, id).is_some(),
                QuestionOwner::Exam(id) => find_by_id(&self.exams, id).is_some(),
            };
            if !owner_exists {
                issues.push(IntegrityIssue::UnknownOwner { owner: set.owner });
            }
            for id in &set.questions {
                if find_by_id(&self.questions, *id).is_none() {
                    issues.push(IntegrityIssue::UnknownQuestion {
                        owner: set.owner,
                        question_id: id.to_string(),
                    });
                }
            }
        }

        issues
    }
}

fn check_unique<T: Identified + Slugged>(items: &[T], issues: &mut Vec<IntegrityIssue>) {
    let mut slugs = HashSet::new();
    for item in items {
        if !slugs.insert(item.slug().as_str()) {
            issues.push(IntegrityIssue::DuplicateSlug {
                kind: T::KIND,
                slug: item.slug().to_string(),
            });
        }
    }
    check_unique_ids(items, issues);
}

fn check_unique_ids<T: Identified>(items: &[T], issues: &mut Vec<IntegrityIssue>) {
    let mut seen: Vec<T::Id> = Vec::with_capacity(items.len());
    for item in items {
        let id = item.id();
        if seen.contains(&id) {
            issues.push(IntegrityIssue::DuplicateId {
                kind: T::KIND,
                id: id.to_string(),
            });
        } else {
            seen.push(id);
        }
    }
}

fn check_parent<C: Identified, P: Identified>(
    child: &C,
    parents: &[P],
    parent_id: P::Id,
    issues: &mut Vec<IntegrityIssue>,
) {
    if find_by_id(parents, parent_id).is_none() {
        issues.push(IntegrityIssue::DanglingParent {
            kind: C::KIND,
            id: child.id().to_string(),
            parent: P::KIND,
            parent_id: parent_id.to_string(),
        });
    }
}
