use std::sync::Arc;

use prep_core::lookup::{filter_by_parent, require_by_id, require_by_slug};
use prep_core::model::{
    Catalog, Chapter, Course, Exam, ExamId, ExamKind, ExamLevel, IntegrityIssue, Question,
    QuestionOwner, Specialty, Subspecialty, Topic,
};
use prep_core::{DashboardScope, EntityKind, LookupError};
use storage::repository::CatalogRepository;

use crate::error::CatalogServiceError;

//
// ─── SCOPE ─────────────────────────────────────────────────────────────────────
//

/// Entities addressed by a dashboard path, resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScope {
    pub specialty: Specialty,
    pub level: ExamLevel,
    pub subspecialty: Option<Subspecialty>,
}

impl ResolvedScope {
    #[must_use]
    pub fn to_scope(&self) -> DashboardScope {
        DashboardScope {
            specialty: self.specialty.slug.clone(),
            level: self.level.slug.clone(),
            subspecialty: self.subspecialty.as_ref().map(|sub| sub.slug.clone()),
        }
    }
}

//
// ─── BORROWED QUERIES ──────────────────────────────────────────────────────────
//

/// Parent-aware lookups over a loaded catalog.
///
/// Child slugs are only matched within their parent, so `/dentistry/board_promotion`
/// does not resolve to medicine's board level.
#[derive(Clone, Copy)]
pub struct CatalogView<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogView<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// # Errors
    ///
    /// Returns `LookupError::NotFound` for an unknown specialty slug.
    pub fn specialty(&self, slug: &str) -> Result<&'a Specialty, LookupError> {
        require_by_slug(&self.catalog.specialties, slug)
    }

    #[must_use]
    pub fn levels(&self, specialty: &Specialty) -> Vec<&'a ExamLevel> {
        filter_by_parent(&self.catalog.exam_levels, specialty.id)
    }

    /// # Errors
    ///
    /// Returns `LookupError::NotFound` if no level of `specialty` carries `slug`.
    pub fn level(&self, specialty: &Specialty, slug: &str) -> Result<&'a ExamLevel, LookupError> {
        self.levels(specialty)
            .into_iter()
            .find(|level| level.slug.as_str() == slug)
            .ok_or_else(|| LookupError::not_found(EntityKind::ExamLevel, slug))
    }

    #[must_use]
    pub fn subspecialties(&self, level: &ExamLevel) -> Vec<&'a Subspecialty> {
        filter_by_parent(&self.catalog.subspecialties, level.id)
            .into_iter()
            .filter(|sub| sub.specialty_id == level.specialty_id)
            .collect()
    }

    /// # Errors
    ///
    /// Returns `LookupError::NotFound` if no subspecialty of `level` carries `slug`.
    pub fn subspecialty(
        &self,
        level: &ExamLevel,
        slug: &str,
    ) -> Result<&'a Subspecialty, LookupError> {
        self.subspecialties(level)
            .into_iter()
            .find(|sub| sub.slug.as_str() == slug)
            .ok_or_else(|| LookupError::not_found(EntityKind::Subspecialty, slug))
    }

    /// Resolves a dashboard scope.
    ///
    /// A level that requires a subspecialty has no level-wide dashboard, so a scope
    /// without one is reported as a missing subspecialty.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::NotFound` naming the first segment that does not resolve.
    pub fn scope(&self, scope: &DashboardScope) -> Result<ResolvedScope, LookupError> {
        let specialty = self.specialty(scope.specialty.as_str())?;
        let level = self.level(specialty, scope.level.as_str())?;
        let subspecialty = match &scope.subspecialty {
            Some(slug) => Some(self.subspecialty(level, slug.as_str())?.clone()),
            None if level.requires_subspecialty => {
                return Err(LookupError::not_found(
                    EntityKind::Subspecialty,
                    format!("{}/{}", specialty.slug, level.slug),
                ));
            }
            None => None,
        };
        Ok(ResolvedScope {
            specialty: specialty.clone(),
            level: level.clone(),
            subspecialty,
        })
    }

    #[must_use]
    pub fn courses(&self, scope: &ResolvedScope) -> Vec<&'a Course> {
        let sub_id = scope.subspecialty.as_ref().map(|sub| sub.id);
        self.catalog
            .courses
            .iter()
            .filter(|course| course.in_scope(scope.specialty.id, scope.level.id, sub_id))
            .collect()
    }

    /// # Errors
    ///
    /// Returns `LookupError::NotFound` for an unknown course slug.
    pub fn course(&self, slug: &str) -> Result<&'a Course, LookupError> {
        require_by_slug(&self.catalog.courses, slug)
    }

    #[must_use]
    pub fn chapters(&self, course: &Course) -> Vec<&'a Chapter> {
        filter_by_parent(&self.catalog.chapters, course.id)
    }

    /// # Errors
    ///
    /// Returns `LookupError::NotFound` for an unknown chapter slug.
    pub fn chapter(&self, slug: &str) -> Result<&'a Chapter, LookupError> {
        require_by_slug(&self.catalog.chapters, slug)
    }

    #[must_use]
    pub fn topics(&self, chapter: &Chapter) -> Vec<&'a Topic> {
        filter_by_parent(&self.catalog.topics, chapter.id)
    }

    /// # Errors
    ///
    /// Returns `LookupError::NotFound` for an unknown topic slug.
    pub fn topic(&self, slug: &str) -> Result<&'a Topic, LookupError> {
        require_by_slug(&self.catalog.topics, slug)
    }

    #[must_use]
    pub fn exams(&self) -> Vec<&'a Exam> {
        self.catalog.exams.iter().collect()
    }

    /// Exams grouped by kind, in `ExamKind::ALL` order, empty groups dropped.
    #[must_use]
    pub fn exams_by_kind(&self) -> Vec<(ExamKind, Vec<&'a Exam>)> {
        ExamKind::ALL
            .into_iter()
            .map(|kind| {
                let exams = self
                    .catalog
                    .exams
                    .iter()
                    .filter(|exam| exam.kind == kind)
                    .collect::<Vec<_>>();
                (kind, exams)
            })
            .filter(|(_, exams)| !exams.is_empty())
            .collect()
    }

    /// # Errors
    ///
    /// Returns `LookupError::NotFound` for an unknown exam id.
    pub fn exam(&self, id: ExamId) -> Result<&'a Exam, LookupError> {
        require_by_id(&self.catalog.exams, id)
    }

    #[must_use]
    pub fn questions(&self, owner: QuestionOwner) -> Vec<&'a Question> {
        self.catalog.questions_for(owner)
    }
}

fn cloned<T: Clone>(items: Vec<&T>) -> Vec<T> {
    items.into_iter().cloned().collect()
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Typed, owned lookups over the catalog provider.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// The loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the provider cannot load it.
    pub async fn snapshot(&self) -> Result<Arc<Catalog>, CatalogServiceError> {
        Ok(self.catalog.load_catalog().await?)
    }

    /// Runs the integrity check and logs every finding as a warning.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the provider cannot load the catalog.
    pub async fn check_integrity(&self) -> Result<Vec<IntegrityIssue>, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        let issues = catalog.validate();
        for issue in &issues {
            log::warn!("catalog integrity: {issue}");
        }
        Ok(issues)
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the provider cannot load the catalog.
    pub async fn specialties(&self) -> Result<Vec<Specialty>, CatalogServiceError> {
        Ok(self.snapshot().await?.specialties.clone())
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` for an unknown slug.
    pub async fn specialty_by_slug(&self, slug: &str) -> Result<Specialty, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        Ok(CatalogView::new(&catalog).specialty(slug)?.clone())
    }

    /// Levels of the specialty addressed by `specialty`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` for an unknown specialty.
    pub async fn levels_for(&self, specialty: &str) -> Result<Vec<ExamLevel>, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        let view = CatalogView::new(&catalog);
        let specialty = view.specialty(specialty)?;
        Ok(cloned(view.levels(specialty)))
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` if either segment does not resolve.
    pub async fn level_by_slug(
        &self,
        specialty: &str,
        level: &str,
    ) -> Result<ExamLevel, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        let view = CatalogView::new(&catalog);
        let specialty = view.specialty(specialty)?;
        Ok(view.level(specialty, level)?.clone())
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` if either segment does not resolve.
    pub async fn subspecialties_for(
        &self,
        specialty: &str,
        level: &str,
    ) -> Result<Vec<Subspecialty>, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        let view = CatalogView::new(&catalog);
        let specialty = view.specialty(specialty)?;
        let level = view.level(specialty, level)?;
        Ok(cloned(view.subspecialties(level)))
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` if any segment does not resolve.
    pub async fn subspecialty_by_slug(
        &self,
        specialty: &str,
        level: &str,
        subspecialty: &str,
    ) -> Result<Subspecialty, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        let view = CatalogView::new(&catalog);
        let specialty = view.specialty(specialty)?;
        let level = view.level(specialty, level)?;
        Ok(view.subspecialty(level, subspecialty)?.clone())
    }

    /// Courses listed on the dashboard for `scope`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` if the scope does not resolve.
    pub async fn courses_for(
        &self,
        scope: &DashboardScope,
    ) -> Result<Vec<Course>, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        let view = CatalogView::new(&catalog);
        let scope = view.scope(scope)?;
        Ok(cloned(view.courses(&scope)))
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` for an unknown slug.
    pub async fn course_by_slug(&self, slug: &str) -> Result<Course, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        Ok(CatalogView::new(&catalog).course(slug)?.clone())
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` for an unknown course.
    pub async fn chapters_for(&self, course: &str) -> Result<Vec<Chapter>, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        let view = CatalogView::new(&catalog);
        let course = view.course(course)?;
        Ok(cloned(view.chapters(course)))
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` for an unknown slug.
    pub async fn chapter_by_slug(&self, slug: &str) -> Result<Chapter, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        Ok(CatalogView::new(&catalog).chapter(slug)?.clone())
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` for an unknown chapter.
    pub async fn topics_for(&self, chapter: &str) -> Result<Vec<Topic>, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        let view = CatalogView::new(&catalog);
        let chapter = view.chapter(chapter)?;
        Ok(cloned(view.topics(chapter)))
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` for an unknown slug.
    pub async fn topic_by_slug(&self, slug: &str) -> Result<Topic, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        Ok(CatalogView::new(&catalog).topic(slug)?.clone())
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the provider cannot load the catalog.
    pub async fn exams(&self) -> Result<Vec<Exam>, CatalogServiceError> {
        Ok(self.snapshot().await?.exams.clone())
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the provider cannot load the catalog.
    pub async fn exams_by_kind(&self) -> Result<Vec<(ExamKind, Vec<Exam>)>, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        Ok(CatalogView::new(&catalog)
            .exams_by_kind()
            .into_iter()
            .map(|(kind, exams)| (kind, cloned(exams)))
            .collect())
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` for an unknown id.
    pub async fn exam_by_id(&self, id: ExamId) -> Result<Exam, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        Ok(CatalogView::new(&catalog).exam(id)?.clone())
    }

    /// Questions bound to `owner`, in set order. Empty when nothing is bound.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the provider cannot load the catalog.
    pub async fn questions_for(
        &self,
        owner: QuestionOwner,
    ) -> Result<Vec<Question>, CatalogServiceError> {
        let catalog = self.snapshot().await?;
        let questions = cloned(CatalogView::new(&catalog).questions(owner));
        log::debug!("{} questions bound to {owner:?}", questions.len());
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use prep_core::model::{Slug, SubspecialtyId};
    use storage::repository::InMemoryCatalog;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryCatalog::builtin().unwrap()))
    }

    fn slug(value: &str) -> Slug {
        Slug::parse(value).unwrap()
    }

    #[tokio::test]
    async fn levels_follow_their_specialty() {
        let service = service();
        let levels = service.levels_for("medicine").await.unwrap();
        let slugs: Vec<_> = levels.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs, vec!["pre_residency", "residency", "board_promotion"]);

        let err = service
            .level_by_slug("dentistry", "board_promotion")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn unknown_specialty_is_not_found() {
        let err = service().specialty_by_slug("unknown-specialty").await.unwrap_err();
        match err {
            CatalogServiceError::Lookup(lookup) => assert_eq!(lookup.kind(), EntityKind::Specialty),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn courses_for_subspecialty_scope() {
        let scope = DashboardScope {
            specialty: slug("medicine"),
            level: slug("board_promotion"),
            subspecialty: Some(slug("infectious")),
        };
        let courses = service().courses_for(&scope).await.unwrap();
        assert_eq!(courses.len(), 2);
        assert!(
            courses
                .iter()
                .all(|c| c.subspecialty_id == Some(SubspecialtyId::new(1)))
        );
    }

    #[tokio::test]
    async fn level_requiring_subspecialty_has_no_level_dashboard() {
        let scope = DashboardScope {
            specialty: slug("medicine"),
            level: slug("board_promotion"),
            subspecialty: None,
        };
        let err = service().courses_for(&scope).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn level_dashboard_without_courses_is_empty() {
        let scope = DashboardScope {
            specialty: slug("medicine"),
            level: slug("residency"),
            subspecialty: None,
        };
        assert!(service().courses_for(&scope).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn chapters_and_topics_keep_source_order() {
        let service = service();
        let chapters = service.chapters_for("harrison-inf").await.unwrap();
        let slugs: Vec<_> = chapters.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["bacterial", "viral", "fungal"]);

        let topics = service.topics_for("fungal").await.unwrap();
        let slugs: Vec<_> = topics.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["candidiasis", "aspergillosis", "mucormycosis"]);
        assert!(service.topics_for("bacterial").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn exams_group_by_kind_and_drop_empty_groups() {
        let groups = service().exams_by_kind().await.unwrap();
        let kinds: Vec<_> = groups.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, vec![ExamKind::PastYear, ExamKind::Authored]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[tokio::test]
    async fn exam_questions_follow_set_order() {
        let questions = service()
            .questions_for(QuestionOwner::Exam(ExamId::new(1)))
            .await
            .unwrap();
        let ids: Vec<_> = questions.iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, vec![201, 202]);
        assert!(
            service()
                .questions_for(QuestionOwner::Exam(ExamId::new(2)))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn builtin_catalog_has_no_integrity_issues() {
        assert!(service().check_integrity().await.unwrap().is_empty());
    }
}
