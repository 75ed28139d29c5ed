use serde::{Deserialize, Serialize};

use crate::lookup::{ChildOf, EntityKind, Identified, Slugged};
use crate::model::ids::{ExamLevelId, SpecialtyId, SubspecialtyId};
use crate::model::slug::Slug;

/// Root of the catalog (e.g. medicine, dentistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: SpecialtyId,
    pub slug: Slug,
    pub name_fa: String,
    pub name_en: String,
    pub icon: String,
}

/// Exam tier offered for a specialty (pre-residency, residency, board).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamLevel {
    pub id: ExamLevelId,
    pub specialty_id: SpecialtyId,
    pub slug: Slug,
    pub name_fa: String,
    pub name_en: String,
    pub icon: String,
    /// When set, users pick a subspecialty before reaching the dashboard.
    pub requires_subspecialty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subspecialty {
    pub id: SubspecialtyId,
    pub specialty_id: SpecialtyId,
    pub exam_level_id: ExamLevelId,
    pub slug: Slug,
    pub name_fa: String,
    pub name_en: String,
}

impl Identified for Specialty {
    type Id = SpecialtyId;
    const KIND: EntityKind = EntityKind::Specialty;

    fn id(&self) -> SpecialtyId {
        self.id
    }
}

impl Slugged for Specialty {
    fn slug(&self) -> &Slug {
        &self.slug
    }
}

impl Identified for ExamLevel {
    type Id = ExamLevelId;
    const KIND: EntityKind = EntityKind::ExamLevel;

    fn id(&self) -> ExamLevelId {
        self.id
    }
}

impl Slugged for ExamLevel {
    fn slug(&self) -> &Slug {
        &self.slug
    }
}

impl ChildOf<SpecialtyId> for ExamLevel {
    fn parent_id(&self) -> SpecialtyId {
        self.specialty_id
    }
}

impl Identified for Subspecialty {
    type Id = SubspecialtyId;
    const KIND: EntityKind = EntityKind::Subspecialty;

    fn id(&self) -> SubspecialtyId {
        self.id
    }
}

impl Slugged for Subspecialty {
    fn slug(&self) -> &Slug {
        &self.slug
    }
}

impl ChildOf<SpecialtyId> for Subspecialty {
    fn parent_id(&self) -> SpecialtyId {
        self.specialty_id
    }
}

impl ChildOf<ExamLevelId> for Subspecialty {
    fn parent_id(&self) -> ExamLevelId {
        self.exam_level_id
    }
}
