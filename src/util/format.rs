use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// `₹240.00` style: symbol followed by exactly two decimals, halves rounded away from zero.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    format!("{symbol}{rounded:.2}")
}

/// Symbol followed by the number as given, so `240.0` shows as `₹240` and `99.5` as `₹99.5`.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    format!("{symbol}{amount}")
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// `5 Mar 2024`
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%-d %b %Y").to_string()
}

/// `5 Mar 2024, 02:30 pm`
pub fn format_date_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%-d %b %Y, %I:%M %P").to_string()
}

/// Human distance between `then` and `now`: minutes, hours, then days up to a week.
/// Older dates fall back to [`format_date`]. Future dates read as "Just now".
pub fn relative_time<Tz: TimeZone>(now: &DateTime<Tz>, then: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let minutes = now.clone().signed_duration_since(then.clone()).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    fn plural(n: i64, unit: &str) -> String {
        format!("{n} {unit}{} ago", if n > 1 { "s" } else { "" })
    }

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 7 {
        plural(days, "day")
    } else {
        format_date(then)
    }
}
