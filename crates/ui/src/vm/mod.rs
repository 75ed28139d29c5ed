mod attempt_vm;
mod catalog_vm;
mod markdown_vm;
mod results_vm;
mod time_fmt;

pub use attempt_vm::{
    AttemptIntent, AttemptOutcome, AttemptVm, FeedbackVm, NavCellVm, OptionTone, OptionVm,
};
pub use catalog_vm::{
    EntryCardVm, ExamCardVm, ExamGroupVm, RowVm, ScopeVm, TopicRowVm, map_chapter_rows,
    map_course_rows, map_exam_groups, map_level_cards, map_specialty_cards,
    map_subspecialty_cards, map_topic_rows,
};
pub use markdown_vm::{dedent, markdown_to_html, sanitize_html};
pub use results_vm::{ResultsVm, ReviewRowVm, map_results};
pub use time_fmt::{format_countdown, format_duration_label};
