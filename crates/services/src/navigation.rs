//! Screen resolution: from parsed route parameters to the catalog entities a view
//! renders.

use std::sync::Arc;

use prep_core::model::{
    AttemptId, Catalog, Chapter, Course, Exam, ExamId, ExamKind, ExamLevel, Question,
    QuestionOwner, Specialty, Subspecialty, Topic,
};
use prep_core::navigation::level_entry;
use prep_core::{LookupError, Screen};

use crate::catalog_service::{CatalogService, CatalogView, ResolvedScope};
use crate::error::CatalogServiceError;
use crate::results_service::QUIZ_RESULTS_EXAM;

/// Exam level with the screen that choosing it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelChoice {
    pub level: ExamLevel,
    pub target: Screen,
}

/// A screen together with everything it displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedScreen {
    Home {
        specialties: Vec<Specialty>,
    },
    Levels {
        specialty: Specialty,
        levels: Vec<LevelChoice>,
    },
    Subspecialties {
        specialty: Specialty,
        level: ExamLevel,
        subspecialties: Vec<Subspecialty>,
    },
    Dashboard {
        scope: ResolvedScope,
    },
    Exams {
        scope: ResolvedScope,
        groups: Vec<(ExamKind, Vec<Exam>)>,
    },
    Courses {
        scope: ResolvedScope,
        courses: Vec<Course>,
    },
    Chapters {
        course: Course,
        chapters: Vec<Chapter>,
    },
    Topics {
        course: Option<Course>,
        chapter: Chapter,
        topics: Vec<Topic>,
    },
    TopicStudy {
        topic: Topic,
        question_count: usize,
    },
    TopicQuiz {
        topic: Topic,
        questions: Vec<Question>,
    },
    ExamTake {
        exam: Exam,
        questions: Vec<Question>,
    },
    /// `exam` is `None` for topic-quiz results.
    ExamResults {
        exam: Option<Exam>,
        attempt: AttemptId,
    },
}

fn owned<T: Clone>(items: Vec<&T>) -> Vec<T> {
    items.into_iter().cloned().collect()
}

/// Pure lookup from a screen's parameters to the entities it needs.
///
/// # Errors
///
/// Returns `LookupError::NotFound` naming the first parameter that does not resolve.
pub fn resolve_screen(catalog: &Catalog, screen: &Screen) -> Result<ResolvedScreen, LookupError> {
    let view = CatalogView::new(catalog);
    let resolved = match screen {
        Screen::Home => ResolvedScreen::Home {
            specialties: catalog.specialties.clone(),
        },
        Screen::Levels { specialty } => {
            let specialty = view.specialty(specialty.as_str())?;
            let levels = view
                .levels(specialty)
                .into_iter()
                .map(|level| LevelChoice {
                    level: level.clone(),
                    target: level_entry(specialty, level),
                })
                .collect();
            ResolvedScreen::Levels {
                specialty: specialty.clone(),
                levels,
            }
        }
        Screen::Subspecialties { specialty, level } => {
            let specialty = view.specialty(specialty.as_str())?;
            let level = view.level(specialty, level.as_str())?;
            ResolvedScreen::Subspecialties {
                specialty: specialty.clone(),
                level: level.clone(),
                subspecialties: owned(view.subspecialties(level)),
            }
        }
        Screen::Dashboard(scope) => ResolvedScreen::Dashboard {
            scope: view.scope(scope)?,
        },
        Screen::Exams(scope) => ResolvedScreen::Exams {
            scope: view.scope(scope)?,
            groups: view
                .exams_by_kind()
                .into_iter()
                .map(|(kind, exams)| (kind, owned(exams)))
                .collect(),
        },
        Screen::Courses(scope) => {
            let scope = view.scope(scope)?;
            let courses = owned(view.courses(&scope));
            ResolvedScreen::Courses { scope, courses }
        }
        Screen::Chapters { course } => {
            let course = view.course(course.as_str())?;
            ResolvedScreen::Chapters {
                course: course.clone(),
                chapters: owned(view.chapters(course)),
            }
        }
        Screen::Topics { chapter } => {
            let chapter = view.chapter(chapter.as_str())?;
            let course = catalog
                .courses
                .iter()
                .find(|course| course.id == chapter.course_id)
                .cloned();
            ResolvedScreen::Topics {
                course,
                chapter: chapter.clone(),
                topics: owned(view.topics(chapter)),
            }
        }
        Screen::TopicStudy { topic } => {
            let topic = view.topic(topic.as_str())?;
            ResolvedScreen::TopicStudy {
                question_count: view.questions(QuestionOwner::Topic(topic.id)).len(),
                topic: topic.clone(),
            }
        }
        Screen::TopicQuiz { topic } => {
            let topic = view.topic(topic.as_str())?;
            ResolvedScreen::TopicQuiz {
                questions: owned(view.questions(QuestionOwner::Topic(topic.id))),
                topic: topic.clone(),
            }
        }
        Screen::ExamTake { exam } => {
            let exam = view.exam(*exam)?;
            ResolvedScreen::ExamTake {
                questions: owned(view.questions(QuestionOwner::Exam(exam.id))),
                exam: exam.clone(),
            }
        }
        Screen::ExamResults { exam, attempt } => ResolvedScreen::ExamResults {
            exam: results_exam(&view, *exam)?,
            attempt: *attempt,
        },
    };
    Ok(resolved)
}

fn results_exam(view: &CatalogView<'_>, exam: ExamId) -> Result<Option<Exam>, LookupError> {
    if exam == QUIZ_RESULTS_EXAM {
        return Ok(None);
    }
    view.exam(exam).map(|exam| Some(exam.clone()))
}

/// Resolves screens against the catalog provider.
#[derive(Clone)]
pub struct NavigationService {
    catalog: Arc<CatalogService>,
}

impl NavigationService {
    #[must_use]
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }

    /// Resolve a screen.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Lookup` when a parameter does not resolve and
    /// `CatalogServiceError::Storage` if the catalog cannot be loaded.
    pub async fn resolve(&self, screen: &Screen) -> Result<ResolvedScreen, CatalogServiceError> {
        let catalog = self.catalog.snapshot().await?;
        let resolved = resolve_screen(&catalog, screen);
        match &resolved {
            Ok(_) => log::debug!("resolved {}", screen.to_path()),
            Err(err) => log::debug!("{} did not resolve: {err}", screen.to_path()),
        }
        Ok(resolved?)
    }

    /// Parse and resolve a path. Unknown paths yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// See [`NavigationService::resolve`].
    pub async fn resolve_path(
        &self,
        path: &str,
    ) -> Result<Option<ResolvedScreen>, CatalogServiceError> {
        match Screen::parse(path) {
            Some(screen) => self.resolve(&screen).await.map(Some),
            None => {
                log::debug!("no route matches {path}");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use prep_core::model::Slug;
    use prep_core::{DashboardScope, EntityKind};
    use storage::seed::builtin_catalog;

    fn resolve(path: &str) -> Result<ResolvedScreen, LookupError> {
        let screen = Screen::parse(path).unwrap();
        resolve_screen(&builtin_catalog().unwrap(), &screen)
    }

    #[test]
    fn levels_carry_their_entry_screen() {
        let ResolvedScreen::Levels { levels, .. } = resolve("/medicine").unwrap() else {
            panic!("expected levels");
        };
        let targets: Vec<_> = levels.iter().map(|l| l.target.to_path()).collect();
        assert_eq!(
            targets,
            vec![
                "/medicine/pre_residency/dashboard",
                "/medicine/residency/dashboard",
                "/medicine/board_promotion/subspecialties",
            ]
        );
    }

    #[test]
    fn unknown_specialty_is_not_found() {
        let err = resolve("/unknown-specialty").unwrap_err();
        assert_eq!(err.kind(), EntityKind::Specialty);
    }

    #[test]
    fn subspecialty_must_belong_to_level() {
        let err = resolve("/medicine/residency/infectious/dashboard").unwrap_err();
        assert_eq!(err.kind(), EntityKind::Subspecialty);
        assert!(resolve("/medicine/board_promotion/infectious/dashboard").is_ok());
    }

    #[test]
    fn topics_link_back_to_course() {
        let ResolvedScreen::Topics { course, topics, .. } =
            resolve("/chapters/fungal/topics").unwrap()
        else {
            panic!("expected topics");
        };
        assert_eq!(course.unwrap().slug.as_str(), "harrison-inf");
        assert_eq!(topics.len(), 3);
    }

    #[test]
    fn topic_quiz_collects_bound_questions() {
        let ResolvedScreen::TopicQuiz { questions, .. } =
            resolve("/topics/candidiasis/quiz").unwrap()
        else {
            panic!("expected quiz");
        };
        assert_eq!(questions.len(), 2);

        let ResolvedScreen::TopicQuiz { questions, .. } =
            resolve("/topics/aspergillosis/quiz").unwrap()
        else {
            panic!("expected quiz");
        };
        assert!(questions.is_empty());
    }

    #[test]
    fn results_for_topic_quiz_have_no_exam() {
        let ResolvedScreen::ExamResults { exam, attempt } =
            resolve("/exam/0/results/3").unwrap()
        else {
            panic!("expected results");
        };
        assert!(exam.is_none());
        assert_eq!(attempt, AttemptId::new(3));
        assert_eq!(resolve("/exam/42/results/1").unwrap_err().kind(), EntityKind::Exam);
    }

    #[tokio::test]
    async fn resolve_path_reports_unknown_paths_as_none() {
        let catalog = Arc::new(CatalogService::new(Arc::new(
            storage::repository::InMemoryCatalog::builtin().unwrap(),
        )));
        let nav = NavigationService::new(catalog);
        assert!(nav.resolve_path("/a/b/c/d/e/f").await.unwrap().is_none());

        let screen = Screen::Dashboard(DashboardScope {
            specialty: Slug::parse("medicine").unwrap(),
            level: Slug::parse("residency").unwrap(),
            subspecialty: None,
        });
        assert!(matches!(
            nav.resolve(&screen).await.unwrap(),
            ResolvedScreen::Dashboard { .. }
        ));
    }
}
