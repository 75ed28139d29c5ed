use std::str::FromStr;

use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};
use prep_core::model::{AttemptId, ExamId, Slug};
use prep_core::{DashboardScope, Screen};

use crate::app::APP_TITLE;
use crate::context::AppContext;
use crate::views::{
    ChaptersView, CoursesView, DashboardView, ExamView, ExamsView, HomeView, LevelCoursesView,
    LevelDashboardView, LevelExamsView, LevelsView, NotFoundView, QuizView, ResultsView,
    StudyView, SubspecialtiesView, TopicsView,
};

// Literal-prefixed routes come first; the catch-all renders the not-found placeholder.
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/courses/:course/chapters", ChaptersView)] Chapters { course: Slug },
        #[route("/chapters/:chapter/topics", TopicsView)] Topics { chapter: Slug },
        #[route("/topics/:topic/study", StudyView)] TopicStudy { topic: Slug },
        #[route("/topics/:topic/quiz", QuizView)] TopicQuiz { topic: Slug },
        #[route("/exam/:exam_id/take", ExamView)] ExamTake { exam_id: ExamId },
        #[route("/exam/:exam_id/results/:attempt_id", ResultsView)] ExamResults { exam_id: ExamId, attempt_id: AttemptId },
        #[route("/:specialty", LevelsView)] Levels { specialty: Slug },
        #[route("/:specialty/:level/subspecialties", SubspecialtiesView)] Subspecialties { specialty: Slug, level: Slug },
        #[route("/:specialty/:level/dashboard", LevelDashboardView)] LevelDashboard { specialty: Slug, level: Slug },
        #[route("/:specialty/:level/dashboard/exams", LevelExamsView)] LevelExams { specialty: Slug, level: Slug },
        #[route("/:specialty/:level/dashboard/courses", LevelCoursesView)] LevelCourses { specialty: Slug, level: Slug },
        #[route("/:specialty/:level/:subspecialty/dashboard", DashboardView)] Dashboard { specialty: Slug, level: Slug, subspecialty: Slug },
        #[route("/:specialty/:level/:subspecialty/dashboard/exams", ExamsView)] Exams { specialty: Slug, level: Slug, subspecialty: Slug },
        #[route("/:specialty/:level/:subspecialty/dashboard/courses", CoursesView)] Courses { specialty: Slug, level: Slug, subspecialty: Slug },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl From<&Screen> for Route {
    fn from(screen: &Screen) -> Self {
        match screen.clone() {
            Screen::Home => Route::Home {},
            Screen::Levels { specialty } => Route::Levels { specialty },
            Screen::Subspecialties { specialty, level } => {
                Route::Subspecialties { specialty, level }
            }
            Screen::Dashboard(scope) => dashboard_route(scope, DashboardPage::Overview),
            Screen::Exams(scope) => dashboard_route(scope, DashboardPage::Exams),
            Screen::Courses(scope) => dashboard_route(scope, DashboardPage::Courses),
            Screen::Chapters { course } => Route::Chapters { course },
            Screen::Topics { chapter } => Route::Topics { chapter },
            Screen::TopicStudy { topic } => Route::TopicStudy { topic },
            Screen::TopicQuiz { topic } => Route::TopicQuiz { topic },
            Screen::ExamTake { exam } => Route::ExamTake { exam_id: exam },
            Screen::ExamResults { exam, attempt } => Route::ExamResults {
                exam_id: exam,
                attempt_id: attempt,
            },
        }
    }
}

/// Tab of a dashboard scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPage {
    Overview,
    Exams,
    Courses,
}

impl DashboardPage {
    #[must_use]
    pub fn screen(self, scope: DashboardScope) -> Screen {
        match self {
            DashboardPage::Overview => Screen::Dashboard(scope),
            DashboardPage::Exams => Screen::Exams(scope),
            DashboardPage::Courses => Screen::Courses(scope),
        }
    }
}

#[must_use]
pub fn dashboard_route(scope: DashboardScope, page: DashboardPage) -> Route {
    let DashboardScope {
        specialty,
        level,
        subspecialty,
    } = scope;
    match (subspecialty, page) {
        (None, DashboardPage::Overview) => Route::LevelDashboard { specialty, level },
        (None, DashboardPage::Exams) => Route::LevelExams { specialty, level },
        (None, DashboardPage::Courses) => Route::LevelCourses { specialty, level },
        (Some(subspecialty), DashboardPage::Overview) => Route::Dashboard {
            specialty,
            level,
            subspecialty,
        },
        (Some(subspecialty), DashboardPage::Exams) => Route::Exams {
            specialty,
            level,
            subspecialty,
        },
        (Some(subspecialty), DashboardPage::Courses) => Route::Courses {
            specialty,
            level,
            subspecialty,
        },
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    use_effect(move || {
        let Some(path) = ctx.take_start_route() else {
            return;
        };
        match Route::from_str(&path) {
            Ok(route) => {
                log::info!("opening start route {path}");
                if let Some(err) = navigator.replace(route) {
                    log::warn!("could not open start route {path}: {err:?}");
                }
            }
            Err(err) => log::warn!("ignoring start route {path}: {err}"),
        }
    });

    rsx! {
        div { class: "app", dir: "rtl",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let specialties = use_resource(move || {
        let catalog = catalog.clone();
        async move { catalog.specialties().await.unwrap_or_default() }
    });
    let specialties = specialties.value().read().clone().unwrap_or_default();

    rsx! {
        nav { class: "navbar",
            Link { class: "navbar__brand", to: Route::Home {}, "{APP_TITLE}" }
            ul { class: "navbar__links",
                for specialty in specialties {
                    li { key: "{specialty.id}",
                        Link { to: Route::Levels { specialty: specialty.slug.clone() },
                            "{specialty.icon} {specialty.name_fa}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[&str] = &[
        "/",
        "/medicine",
        "/medicine/board_promotion/subspecialties",
        "/medicine/residency/dashboard",
        "/medicine/residency/dashboard/exams",
        "/medicine/residency/dashboard/courses",
        "/medicine/board_promotion/infectious/dashboard",
        "/medicine/board_promotion/infectious/dashboard/exams",
        "/medicine/board_promotion/infectious/dashboard/courses",
        "/courses/harrison-inf/chapters",
        "/chapters/fungal/topics",
        "/topics/candidiasis/study",
        "/topics/candidiasis/quiz",
        "/exam/1/take",
        "/exam/1/results/7",
    ];

    #[test]
    fn router_agrees_with_route_table() {
        for path in PATHS {
            let screen = Screen::parse(path).unwrap_or_else(|| panic!("{path} not in table"));
            let route = Route::from_str(path).unwrap_or_else(|_| panic!("{path} not routable"));
            assert_eq!(Route::from(&screen), route, "{path}");
            assert_eq!(route.to_string(), screen.to_path(), "{path}");
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(Screen::parse("/a/b/c/d/e/f").is_none());
        let route = Route::from_str("/a/b/c/d/e/f").unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }

    #[test]
    fn malformed_ids_do_not_reach_exam_views() {
        assert!(Screen::parse("/exam/abc/take").is_none());
        let route = Route::from_str("/exam/abc/take").unwrap();
        assert!(!matches!(route, Route::ExamTake { .. }));
    }
}
