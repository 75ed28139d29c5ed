use prep_core::model::{AttemptSummary, Exam};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub number: usize,
    pub prompt: String,
    pub verdict: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub title: String,
    pub total: u32,
    pub correct: u32,
    pub wrong: u32,
    pub unanswered: u32,
    pub percent_label: String,
    pub passed: bool,
    pub review: Vec<ReviewRowVm>,
}

const PASS_PERCENT: u32 = 50;

#[must_use]
pub fn map_results(exam: Option<&Exam>, summary: &AttemptSummary) -> ResultsVm {
    let title = exam.map_or_else(|| "Topic quiz".to_string(), |exam| exam.title.clone());
    let percent = summary.percent();
    let review = summary
        .missed()
        .map(|(i, outcome)| ReviewRowVm {
            number: i + 1,
            prompt: outcome.prompt.clone(),
            verdict: if outcome.is_wrong() {
                "Wrong"
            } else {
                "Unanswered"
            },
        })
        .collect();

    ResultsVm {
        title,
        total: summary.total,
        correct: summary.correct,
        wrong: summary.wrong,
        unanswered: summary.unanswered,
        percent_label: format!("{percent}%"),
        passed: percent >= PASS_PERCENT,
        review,
    }
}
