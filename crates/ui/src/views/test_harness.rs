use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use prep_core::DashboardScope;
use prep_core::model::{AttemptId, ExamId, Slug};
use services::{AppServices, AttemptService, CatalogService, NavigationService, ResultsService};

use crate::context::{UiApp, build_app_context};
use crate::views::attempt_panel::AttemptTestHandles;
use crate::views::{
    ChaptersView, CoursesView, DashboardView, ExamView, ExamsView, HomeView, LevelCoursesView,
    LevelDashboardView, LevelExamsView, LevelsView, NotFoundView, QuizView, ResultsView,
    StudyView, SubspecialtiesView, TopicsView,
};
use crate::vm::{AttemptIntent, AttemptVm};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn start_route(&self) -> Option<String> {
        None
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn navigation(&self) -> Arc<NavigationService> {
        self.services.navigation()
    }

    fn attempts(&self) -> Arc<AttemptService> {
        self.services.attempts()
    }

    fn results(&self) -> Arc<ResultsService> {
        self.services.results()
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Home,
    Levels(&'static str),
    Subspecialties(&'static str, &'static str),
    Dashboard(DashboardScope),
    Exams(DashboardScope),
    Courses(DashboardScope),
    Chapters(&'static str),
    Topics(&'static str),
    Study(&'static str),
    Quiz(&'static str),
    Exam(u64),
    Results(u64, u64),
    NotFound,
}

impl ViewKind {
    fn is_attempt(&self) -> bool {
        matches!(self, ViewKind::Quiz(_) | ViewKind::Exam(_))
    }
}

pub fn slug(value: &str) -> Slug {
    Slug::parse(value).expect("valid slug")
}

pub fn scope(specialty: &str, level: &str, subspecialty: Option<&str>) -> DashboardScope {
    DashboardScope {
        specialty: slug(specialty),
        level: slug(level),
        subspecialty: subspecialty.map(slug),
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    attempt_handles: Option<AttemptTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.attempt_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

// Catch-all so navigation after finishing an attempt stays inside the harness.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/:..segments")]
    Root { segments: Vec<String> },
}

#[component]
fn Root(segments: Vec<String>) -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Levels(specialty) => rsx! { LevelsView { specialty: slug(specialty) } },
        ViewKind::Subspecialties(specialty, level) => rsx! {
            SubspecialtiesView { specialty: slug(specialty), level: slug(level) }
        },
        ViewKind::Dashboard(scope) => {
            let DashboardScope { specialty, level, subspecialty } = scope;
            match subspecialty {
                Some(subspecialty) => rsx! { DashboardView { specialty, level, subspecialty } },
                None => rsx! { LevelDashboardView { specialty, level } },
            }
        }
        ViewKind::Exams(scope) => {
            let DashboardScope { specialty, level, subspecialty } = scope;
            match subspecialty {
                Some(subspecialty) => rsx! { ExamsView { specialty, level, subspecialty } },
                None => rsx! { LevelExamsView { specialty, level } },
            }
        }
        ViewKind::Courses(scope) => {
            let DashboardScope { specialty, level, subspecialty } = scope;
            match subspecialty {
                Some(subspecialty) => rsx! { CoursesView { specialty, level, subspecialty } },
                None => rsx! { LevelCoursesView { specialty, level } },
            }
        }
        ViewKind::Chapters(course) => rsx! { ChaptersView { course: slug(course) } },
        ViewKind::Topics(chapter) => rsx! { TopicsView { chapter: slug(chapter) } },
        ViewKind::Study(topic) => rsx! { StudyView { topic: slug(topic) } },
        ViewKind::Quiz(topic) => rsx! { QuizView { topic: slug(topic) } },
        ViewKind::Exam(exam) => rsx! { ExamView { exam_id: ExamId::new(exam) } },
        ViewKind::Results(exam, attempt) => rsx! {
            ResultsView { exam_id: ExamId::new(exam), attempt_id: AttemptId::new(attempt) }
        },
        ViewKind::NotFound => rsx! { NotFoundView { segments } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
    pub attempt_handles: Option<AttemptTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let resources and effects settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Send an intent to the mounted quiz or exam and re-render.
    pub fn dispatch(&mut self, intent: AttemptIntent) {
        let handles = self
            .attempt_handles
            .clone()
            .expect("attempt view mounted");
        self.dom.in_runtime(|| handles.dispatch().call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn attempt_vm(&self) -> Option<AttemptVm> {
        let handles = self.attempt_handles.as_ref()?;
        self.dom.in_runtime(|| (*handles.vm().peek()).clone())
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_services(view, AppServices::builtin().unwrap())
}

pub fn setup_view_harness_with_services(view: ViewKind, services: AppServices) -> ViewHarness {
    let attempt_handles = view.is_attempt().then(AttemptTestHandles::default);
    let app = Arc::new(TestApp {
        services: services.clone(),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            attempt_handles: attempt_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        services,
        attempt_handles,
    }
}
