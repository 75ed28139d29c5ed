use std::sync::Arc;

use prep_core::model::{AttemptMode, AttemptSummary, Catalog, QuestionId, QuestionOutcome};
use services::{AppServices, QUIZ_RESULTS_EXAM};
use storage::repository::{CatalogRepository, Storage, StorageError};

use super::test_harness::{ViewKind, scope, setup_view_harness, setup_view_harness_with_services};
use crate::vm::AttemptIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_specialties() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Choose your specialty"), "missing heading in {html}");
    assert!(html.contains("پزشکی"), "missing medicine card in {html}");
    assert!(html.contains("Dentistry"), "missing dentistry card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn levels_view_smoke_routes_by_subspecialty_requirement() {
    let mut harness = setup_view_harness(ViewKind::Levels("medicine"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Board/Promotion"), "missing level in {html}");
    assert!(
        html.contains("/medicine/board_promotion/subspecialties"),
        "board level should ask for a subspecialty in {html}"
    );
    assert!(
        html.contains("/medicine/residency/dashboard"),
        "residency should skip to its dashboard in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn levels_view_smoke_renders_not_found_for_unknown_specialty() {
    let mut harness = setup_view_harness(ViewKind::Levels("unknown-specialty"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Page not found."), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subspecialties_view_smoke_links_dashboards() {
    let mut harness = setup_view_harness(ViewKind::Subspecialties("medicine", "board_promotion"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Choose a subspecialty"), "missing heading in {html}");
    assert!(
        html.contains("/medicine/board_promotion/infectious/dashboard"),
        "missing infectious link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_tabs() {
    let mut harness = setup_view_harness(ViewKind::Dashboard(scope(
        "medicine",
        "board_promotion",
        Some("infectious"),
    )));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("عفونی"), "missing breadcrumb in {html}");
    assert!(
        html.contains("/medicine/board_promotion/infectious/dashboard/exams"),
        "missing exams tab in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_requires_subspecialty_where_declared() {
    let mut harness =
        setup_view_harness(ViewKind::Dashboard(scope("medicine", "board_promotion", None)));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Page not found."), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exams_view_smoke_groups_by_kind() {
    let mut harness = setup_view_harness(ViewKind::Exams(scope("medicine", "residency", None)));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Past-year exams"), "missing past-year group in {html}");
    assert!(html.contains("Authored exams"), "missing authored group in {html}");
    assert!(
        !html.contains("Comprehensive exams"),
        "empty groups should be hidden in {html}"
    );
    assert!(html.contains("/exam/1/take"), "missing exam link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_lists_scope_courses() {
    let mut harness = setup_view_harness(ViewKind::Courses(scope(
        "medicine",
        "board_promotion",
        Some("infectious"),
    )));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("/courses/harrison-inf/chapters"), "missing course in {html}");

    let mut harness = setup_view_harness(ViewKind::Courses(scope("medicine", "residency", None)));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No courses for this scope yet."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn chapters_view_smoke_shows_declared_topic_counts() {
    let mut harness = setup_view_harness(ViewKind::Chapters("harrison-inf"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("12 topics"), "missing declared count in {html}");
    assert!(html.contains("/chapters/fungal/topics"), "missing chapter link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_links_study_and_quiz() {
    let mut harness = setup_view_harness(ViewKind::Topics("fungal"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("/topics/candidiasis/study"), "missing study link in {html}");
    assert!(html.contains("/topics/mucormycosis/quiz"), "missing quiz link in {html}");
    assert!(html.contains("/courses/harrison-inf/chapters"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_markdown() {
    let mut harness = setup_view_harness(ViewKind::Study("candidiasis"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("<h3>"), "markdown not rendered in {html}");
    assert!(html.contains("Start quiz (2 questions)"), "missing quiz link in {html}");

    let mut harness = setup_view_harness(ViewKind::Study("aspergillosis"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No quiz for this topic yet."), "missing empty quiz note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reveals_and_finishes() {
    let mut harness = setup_view_harness(ViewKind::Quiz("candidiasis"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");

    harness.dispatch(AttemptIntent::Select(1));
    let html = harness.render();
    assert!(html.contains("option--correct"), "answer not revealed in {html}");
    assert!(html.contains("Correct!"), "missing feedback in {html}");

    harness.dispatch(AttemptIntent::Advance);
    harness.dispatch(AttemptIntent::Select(0));
    let vm = harness.attempt_vm().expect("quiz started");
    assert_eq!(vm.attempt().correct_count(), 1);
    assert_eq!(vm.advance_label(), "Finish");

    harness.dispatch(AttemptIntent::Advance);
    assert_eq!(harness.services.results().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_blocks_advance_until_answered() {
    let mut harness = setup_view_harness(ViewKind::Quiz("candidiasis"));
    harness.settle().await;

    harness.dispatch(AttemptIntent::Advance);
    let vm = harness.attempt_vm().expect("quiz started");
    assert_eq!(vm.attempt().position(), 0);
    assert!(!vm.can_advance());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_topic_without_questions() {
    let mut harness = setup_view_harness(ViewKind::Quiz("aspergillosis"));
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("No questions are available here yet."),
        "missing empty quiz state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_hides_answers_and_allows_revisits() {
    let mut harness = setup_view_harness(ViewKind::Exam(1));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("02:00:00"), "missing countdown in {html}");
    assert!(html.contains("cell--current"), "missing question strip in {html}");

    harness.dispatch(AttemptIntent::Select(0));
    let html = harness.render();
    assert!(!html.contains("option--correct"), "exam revealed the answer in {html}");
    assert!(html.contains("option--selected"), "missing selection in {html}");

    harness.dispatch(AttemptIntent::Retreat);
    let vm = harness.attempt_vm().expect("exam started");
    assert_eq!(vm.attempt().position(), 0);

    harness.dispatch(AttemptIntent::Advance);
    harness.dispatch(AttemptIntent::JumpTo(0));
    let vm = harness.attempt_vm().expect("exam started");
    assert_eq!(vm.attempt().position(), 0);
    assert_eq!(vm.attempt().current_answer(), Some(0));
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_reports_exam_without_questions() {
    let mut harness = setup_view_harness(ViewKind::Exam(2));
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("No questions are available here yet."),
        "missing empty exam state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_reads_back_recorded_summary() {
    let services = AppServices::builtin().unwrap();
    let summary = AttemptSummary {
        mode: AttemptMode::Quiz,
        total: 2,
        correct: 1,
        wrong: 1,
        unanswered: 0,
        outcomes: vec![
            QuestionOutcome {
                question_id: QuestionId::new(101),
                prompt: "first".into(),
                chosen: Some(1),
                correct_index: 1,
            },
            QuestionOutcome {
                question_id: QuestionId::new(102),
                prompt: "second".into(),
                chosen: Some(0),
                correct_index: 2,
            },
        ],
    };
    services.results().record(None, summary);

    let mut harness = setup_view_harness_with_services(
        ViewKind::Results(QUIZ_RESULTS_EXAM.value(), 1),
        services,
    );
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Topic quiz"), "missing title in {html}");
    assert!(html.contains("50%"), "missing score in {html}");
    assert!(html.contains("second"), "missing review row in {html}");
    assert!(!html.contains("Retake exam"), "quizzes have no retake in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_not_found_for_unknown_attempt() {
    let mut harness = setup_view_harness(ViewKind::Results(1, 42));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Page not found."), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_view_smoke_links_home() {
    let mut harness = setup_view_harness(ViewKind::NotFound);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Back to home"), "missing home link in {html}");
}

struct OfflineCatalog;

#[async_trait::async_trait]
impl CatalogRepository for OfflineCatalog {
    async fn load_catalog(&self) -> Result<Arc<Catalog>, StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let storage = Storage {
        catalog: Arc::new(OfflineCatalog),
    };
    let mut harness =
        setup_view_harness_with_services(ViewKind::Home, AppServices::new(&storage));
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error state in {html}"
    );
}
