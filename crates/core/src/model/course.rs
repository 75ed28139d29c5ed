use serde::{Deserialize, Serialize};

use crate::lookup::{ChildOf, EntityKind, Identified, Slugged};
use crate::model::ids::{ChapterId, CourseId, ExamLevelId, SpecialtyId, SubspecialtyId, TopicId};
use crate::model::slug::Slug;

/// Study course scoped to a specialty/level and optionally a subspecialty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub specialty_id: SpecialtyId,
    pub exam_level_id: ExamLevelId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subspecialty_id: Option<SubspecialtyId>,
    pub slug: Slug,
    pub name_fa: String,
    /// Reference textbook label shown on the course card.
    pub main_reference: String,
}

impl Course {
    /// True when the course is listed on the dashboard for this scope.
    #[must_use]
    pub fn in_scope(
        &self,
        specialty_id: SpecialtyId,
        exam_level_id: ExamLevelId,
        subspecialty_id: Option<SubspecialtyId>,
    ) -> bool {
        self.specialty_id == specialty_id
            && self.exam_level_id == exam_level_id
            && self.subspecialty_id == subspecialty_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub course_id: CourseId,
    pub slug: Slug,
    pub name_fa: String,
    /// Declared metadata. Not derived from, nor checked against, the topic list.
    pub topics_count: u32,
}

/// Study unit; `content` is a markdown blob rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub chapter_id: ChapterId,
    pub slug: Slug,
    pub name_fa: String,
    pub content: String,
}

impl Identified for Course {
    type Id = CourseId;
    const KIND: EntityKind = EntityKind::Course;

    fn id(&self) -> CourseId {
        self.id
    }
}

impl Slugged for Course {
    fn slug(&self) -> &Slug {
        &self.slug
    }
}

impl Identified for Chapter {
    type Id = ChapterId;
    const KIND: EntityKind = EntityKind::Chapter;

    fn id(&self) -> ChapterId {
        self.id
    }
}

impl Slugged for Chapter {
    fn slug(&self) -> &Slug {
        &self.slug
    }
}

impl ChildOf<CourseId> for Chapter {
    fn parent_id(&self) -> CourseId {
        self.course_id
    }
}

impl Identified for Topic {
    type Id = TopicId;
    const KIND: EntityKind = EntityKind::Topic;

    fn id(&self) -> TopicId {
        self.id
    }
}

impl Slugged for Topic {
    fn slug(&self) -> &Slug {
        &self.slug
    }
}

impl ChildOf<ChapterId> for Topic {
    fn parent_id(&self) -> ChapterId {
        self.chapter_id
    }
}
