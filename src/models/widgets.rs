//! Display contracts shared by the dashboard templates. Widgets only carry
//! ready-to-render values; templates do no arithmetic.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub hint: String,
}

impl StatCard {
    pub fn new(title: &str, value: impl ToString) -> Self {
        Self { title: title.to_string(), value: value.to_string(), hint: String::new() }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressBar {
    pub label: String,
    pub percent: u8,
}

impl ProgressBar {
    /// `done` out of `total`, clamped to 0..=100. A zero total reads as 0%.
    pub fn new(label: impl Into<String>, done: f64, total: f64) -> Self {
        let percent = if total > 0.0 && done.is_finite() {
            (done / total * 100.0).round().clamp(0.0, 100.0) as u8
        } else {
            0
        };
        Self { label: label.into(), percent }
    }

    pub fn from_percent(label: impl Into<String>, percent: f64) -> Self {
        Self::new(label, percent, 100.0)
    }
}

/// `1234.5` -> `$1,234.50`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Short label for how long ago `at` was, relative to `now`.
pub fn relative_time(at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(at) = at else {
        return "—".to_string();
    };
    let minutes = (now - at).num_minutes();
    match minutes {
        m if m < 1 => "just now".to_string(),
        m if m < 60 => format!("{m} min ago"),
        m if m < 60 * 24 => format!("{} h ago", m / 60),
        m => format!("{} d ago", m / (60 * 24)),
    }
}

/// `Mon 14 Oct, 18:30` style label, or a dash when unknown.
pub fn short_datetime(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.format("%a %d %b, %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn money_is_grouped_with_two_decimals() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(89.0), "$89.00");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(131_400.0), "$131,400.00");
        assert_eq!(format_money(1_000_000.999), "$1,000,001.00");
        assert_eq!(format_money(-45.25), "-$45.25");
    }

    #[test]
    fn progress_is_clamped_and_safe_on_zero_total() {
        assert_eq!(ProgressBar::new("x", 22.0, 30.0).percent, 73);
        assert_eq!(ProgressBar::new("x", 12.0, 10.0).percent, 100);
        assert_eq!(ProgressBar::new("x", -3.0, 10.0).percent, 0);
        assert_eq!(ProgressBar::new("x", 5.0, 0.0).percent, 0);
        assert_eq!(ProgressBar::from_percent("x", 71.5).percent, 72);
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_time(None, now), "—");
        assert_eq!(relative_time(Some(now), now), "just now");
        assert_eq!(relative_time(Some(now + Duration::minutes(5)), now), "just now");
        assert_eq!(relative_time(Some(now - Duration::minutes(4)), now), "4 min ago");
        assert_eq!(relative_time(Some(now - Duration::hours(3)), now), "3 h ago");
        assert_eq!(relative_time(Some(now - Duration::days(2)), now), "2 d ago");
    }
}
