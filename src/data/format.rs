//! Text formatting helpers for the status panel.

/// Shorten `text` to its first `front` and last `back` characters, joined by
/// `ellipsis`. Text that already fits is returned unchanged.
///
/// ```
/// use plasma_status::data::format::truncate_middle;
///
/// let address = "0x1234567890abcdef1234567890abcdef12345678";
/// assert_eq!(truncate_middle(address, 10, 4, "..."), "0x12345678...5678");
/// ```
pub fn truncate_middle(text: &str, front: usize, back: usize, ellipsis: &str) -> String {
    let len = text.chars().count();
    if len <= front + back {
        return text.to_string();
    }

    let head: String = text.chars().take(front).collect();
    let tail: String = text.chars().skip(len - back).collect();
    format!("{}{}{}", head, ellipsis, tail)
}

/// Relative-time thresholds (seconds, minutes, hours, days, months).
const SECONDS_FEW: f64 = 44.0;
const MINUTES_MAX: f64 = 45.0;
const HOURS_MAX: f64 = 22.0;
const DAYS_MAX: f64 = 26.0;
const MONTHS_MAX: f64 = 11.0;

/// Describe `timestamp` relative to `now` (both Unix seconds), e.g.
/// "3 minutes ago" or "in an hour".
///
/// Each unit is rounded independently and the first unit under its
/// threshold wins, so 90 seconds reads as "2 minutes ago" and 25 days
/// as "25 days ago".
pub fn from_now(timestamp: i64, now: i64) -> String {
    // Subtract as floats; a garbage timestamp must not overflow
    let delta = now as f64 - timestamp as f64;
    let phrase = humanize(delta.abs());
    if delta >= 0.0 {
        format!("{} ago", phrase)
    } else {
        format!("in {}", phrase)
    }
}

fn humanize(abs_seconds: f64) -> String {
    let seconds = abs_seconds.round();
    let minutes = (abs_seconds / 60.0).round();
    let hours = (abs_seconds / 3_600.0).round();
    let days_exact = abs_seconds / 86_400.0;
    let days = days_exact.round();
    // Average Gregorian month length, 146097 days per 4800 months
    let months_exact = days_exact * 4_800.0 / 146_097.0;
    let months = months_exact.round();
    let years = (months_exact / 12.0).round();

    if seconds <= SECONDS_FEW {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < MINUTES_MAX {
        format!("{} minutes", minutes)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < HOURS_MAX {
        format!("{} hours", hours)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < DAYS_MAX {
        format!("{} days", days)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < MONTHS_MAX {
        format!("{} months", months)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_truncate_long_address() {
        let address = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
        assert_eq!(truncate_middle(address, 10, 4, "..."), "0xA0b86991...eB48");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_middle("0x1234", 10, 4, "..."), "0x1234");
        assert_eq!(truncate_middle("abcdefghijklmn", 10, 4, "..."), "abcdefghijklmn");
        assert_eq!(truncate_middle("", 10, 4, "..."), "");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_middle("ééééé", 1, 1, "…"), "é…é");
    }

    #[test]
    fn test_from_now_seconds() {
        assert_eq!(from_now(NOW, NOW), "a few seconds ago");
        assert_eq!(from_now(NOW - 44, NOW), "a few seconds ago");
        assert_eq!(from_now(NOW - 45, NOW), "a minute ago");
        assert_eq!(from_now(NOW - 89, NOW), "a minute ago");
    }

    #[test]
    fn test_from_now_minutes_and_hours() {
        assert_eq!(from_now(NOW - 90, NOW), "2 minutes ago");
        assert_eq!(from_now(NOW - 5 * 60, NOW), "5 minutes ago");
        assert_eq!(from_now(NOW - 44 * 60, NOW), "44 minutes ago");
        assert_eq!(from_now(NOW - 45 * 60, NOW), "an hour ago");
        assert_eq!(from_now(NOW - 3 * 3_600, NOW), "3 hours ago");
        assert_eq!(from_now(NOW - 21 * 3_600, NOW), "21 hours ago");
        assert_eq!(from_now(NOW - 22 * 3_600, NOW), "a day ago");
    }

    #[test]
    fn test_from_now_days_months_years() {
        let day = 86_400;
        assert_eq!(from_now(NOW - 4 * day, NOW), "4 days ago");
        assert_eq!(from_now(NOW - 25 * day, NOW), "25 days ago");
        assert_eq!(from_now(NOW - 26 * day, NOW), "a month ago");
        assert_eq!(from_now(NOW - 60 * day, NOW), "2 months ago");
        assert_eq!(from_now(NOW - 340 * day, NOW), "a year ago");
        assert_eq!(from_now(NOW - 3 * 365 * day, NOW), "3 years ago");
    }

    #[test]
    fn test_from_now_future() {
        assert_eq!(from_now(NOW + 10, NOW), "in a few seconds");
        assert_eq!(from_now(NOW + 3_600, NOW), "in an hour");
    }

    #[test]
    fn test_from_now_unset_block() {
        // A zero timestamp is decades in the past
        assert!(from_now(0, NOW).ends_with("years ago"));
    }

    #[test]
    fn test_from_now_extreme_timestamps() {
        assert!(from_now(i64::MIN, NOW).ends_with("years ago"));
        assert!(from_now(i64::MAX, NOW).starts_with("in "));
        assert!(from_now(NOW, i64::MIN).starts_with("in "));
    }
}
