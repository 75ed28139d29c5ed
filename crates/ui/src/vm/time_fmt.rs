use chrono::Duration;

/// Exam countdown label, e.g. `02:00:00` for 120 minutes.
#[must_use]
pub fn format_countdown(minutes: u32) -> String {
    let total = Duration::minutes(i64::from(minutes));
    format!(
        "{:02}:{:02}:{:02}",
        total.num_hours(),
        total.num_minutes() % 60,
        total.num_seconds() % 60
    )
}

#[must_use]
pub fn format_duration_label(minutes: u32) -> String {
    let total = Duration::minutes(i64::from(minutes));
    match (total.num_hours(), total.num_minutes() % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}
