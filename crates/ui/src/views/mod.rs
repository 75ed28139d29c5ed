mod attempt_panel;
mod cards;
mod chapters;
mod courses;
mod dashboard;
mod exam;
mod exams;
mod home;
mod levels;
mod not_found;
mod quiz;
mod results;
mod state;
mod study;
mod subspecialties;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chapters::ChaptersView;
pub use courses::{CoursesView, LevelCoursesView};
pub use dashboard::{DashboardView, LevelDashboardView};
pub use exam::ExamView;
pub use exams::{ExamsView, LevelExamsView};
pub use home::HomeView;
pub use levels::LevelsView;
pub use not_found::NotFoundView;
pub use quiz::QuizView;
pub use results::ResultsView;
pub use state::{
    NotFoundPanel, StatusView, ViewError, ViewState, use_resolved_screen,
    view_state_from_resource,
};
pub use study::StudyView;
pub use subspecialties::SubspecialtiesView;
pub use topics::TopicsView;
