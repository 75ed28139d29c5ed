use prep_core::model::{Chapter, Course, Exam, ExamKind, Slug, Specialty, Subspecialty, Topic};
use prep_core::Screen;
use services::{LevelChoice, ResolvedScope};

use crate::routes::{DashboardPage, Route, dashboard_route};
use crate::vm::time_fmt::format_duration_label;

#[derive(Clone, Debug, PartialEq)]
pub struct EntryCardVm {
    pub key: String,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub route: Route,
}

#[must_use]
pub fn map_specialty_cards(specialties: &[Specialty]) -> Vec<EntryCardVm> {
    specialties
        .iter()
        .map(|specialty| EntryCardVm {
            key: specialty.slug.to_string(),
            icon: specialty.icon.clone(),
            title: specialty.name_fa.clone(),
            subtitle: specialty.name_en.clone(),
            route: Route::Levels {
                specialty: specialty.slug.clone(),
            },
        })
        .collect()
}

#[must_use]
pub fn map_level_cards(levels: &[LevelChoice]) -> Vec<EntryCardVm> {
    levels
        .iter()
        .map(|choice| EntryCardVm {
            key: choice.level.slug.to_string(),
            icon: choice.level.icon.clone(),
            title: choice.level.name_fa.clone(),
            subtitle: choice.level.name_en.clone(),
            route: Route::from(&choice.target),
        })
        .collect()
}

#[must_use]
pub fn map_subspecialty_cards(
    specialty: &Specialty,
    level_slug: &Slug,
    subspecialties: &[Subspecialty],
) -> Vec<EntryCardVm> {
    subspecialties
        .iter()
        .map(|sub| EntryCardVm {
            key: sub.slug.to_string(),
            icon: String::new(),
            title: sub.name_fa.clone(),
            subtitle: sub.name_en.clone(),
            route: Route::Dashboard {
                specialty: specialty.slug.clone(),
                level: level_slug.clone(),
                subspecialty: sub.slug.clone(),
            },
        })
        .collect()
}

/// Breadcrumb trail for a dashboard scope: specialty, level, then subspecialty.
#[derive(Clone, Debug, PartialEq)]
pub struct ScopeVm {
    pub trail: Vec<String>,
    pub overview: Route,
    pub exams: Route,
    pub courses: Route,
}

impl From<&ResolvedScope> for ScopeVm {
    fn from(scope: &ResolvedScope) -> Self {
        let mut trail = vec![scope.specialty.name_fa.clone(), scope.level.name_fa.clone()];
        if let Some(sub) = &scope.subspecialty {
            trail.push(sub.name_fa.clone());
        }
        let route = |page| dashboard_route(scope.to_scope(), page);
        Self {
            trail,
            overview: route(DashboardPage::Overview),
            exams: route(DashboardPage::Exams),
            courses: route(DashboardPage::Courses),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExamCardVm {
    pub key: String,
    pub title: String,
    pub meta: String,
    pub route: Route,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExamGroupVm {
    pub label: &'static str,
    pub exams: Vec<ExamCardVm>,
}

impl From<&Exam> for ExamCardVm {
    fn from(exam: &Exam) -> Self {
        let mut meta = Vec::new();
        if let Some(year) = exam.year {
            meta.push(year.to_string());
        }
        meta.push(format!("{} questions", exam.questions_count));
        meta.push(format_duration_label(exam.duration_minutes));
        Self {
            key: exam.id.to_string(),
            title: exam.title.clone(),
            meta: meta.join(" · "),
            route: Route::from(&Screen::ExamTake { exam: exam.id }),
        }
    }
}

#[must_use]
pub fn map_exam_groups(groups: &[(ExamKind, Vec<Exam>)]) -> Vec<ExamGroupVm> {
    groups
        .iter()
        .map(|(kind, exams)| ExamGroupVm {
            label: kind.label(),
            exams: exams.iter().map(ExamCardVm::from).collect(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowVm {
    pub key: String,
    pub title: String,
    pub detail: String,
    pub route: Route,
}

#[must_use]
pub fn map_course_rows(courses: &[Course]) -> Vec<RowVm> {
    courses
        .iter()
        .map(|course| RowVm {
            key: course.slug.to_string(),
            title: course.name_fa.clone(),
            detail: course.main_reference.clone(),
            route: Route::Chapters {
                course: course.slug.clone(),
            },
        })
        .collect()
}

#[must_use]
pub fn map_chapter_rows(chapters: &[Chapter]) -> Vec<RowVm> {
    chapters
        .iter()
        .map(|chapter| RowVm {
            key: chapter.slug.to_string(),
            title: chapter.name_fa.clone(),
            // Declared count, shown as authored.
            detail: format!("{} topics", chapter.topics_count),
            route: Route::Topics {
                chapter: chapter.slug.clone(),
            },
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopicRowVm {
    pub key: String,
    pub title: String,
    pub study: Route,
    pub quiz: Route,
}

#[must_use]
pub fn map_topic_rows(topics: &[Topic]) -> Vec<TopicRowVm> {
    topics
        .iter()
        .map(|topic| TopicRowVm {
            key: topic.slug.to_string(),
            title: topic.name_fa.clone(),
            study: Route::TopicStudy {
                topic: topic.slug.clone(),
            },
            quiz: Route::TopicQuiz {
                topic: topic.slug.clone(),
            },
        })
        .collect()
}
