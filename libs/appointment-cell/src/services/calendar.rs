// libs/appointment-cell/src/services/calendar.rs
use chrono::{Duration, NaiveDate, NaiveDateTime};

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn format_time(instant: NaiveDateTime) -> String {
    instant.format("%-I:%M %p").to_string()
}

pub fn format_date_time(instant: NaiveDateTime) -> String {
    instant.format("%b %d, %Y %-I:%M %p").to_string()
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// "30 minutes", "1 hour", "1 hour 15 minutes".
pub fn format_duration(minutes: u32) -> String {
    let minutes = i64::from(minutes);
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        plural(hours, "hour")
    } else {
        format!("{} {}", plural(hours, "hour"), plural(remaining, "minute"))
    }
}

/// "Today", "Tomorrow", "Yesterday", otherwise the formatted date.
pub fn relative_date(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => format_date(date),
    }
}

/// "5 minutes ago", "3 hours from now", "2 days ago"; a week or more away
/// falls back to the formatted date.
pub fn relative_time(instant: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = now - instant;
    let suffix = |value: i64| if value > 0 { "ago" } else { "from now" };

    let minutes = elapsed.num_minutes();
    if minutes.abs() < 60 {
        return format!("{} {}", plural(minutes.abs(), "minute"), suffix(minutes));
    }

    let hours = elapsed.num_hours();
    if hours.abs() < 24 {
        return format!("{} {}", plural(hours.abs(), "hour"), suffix(hours));
    }

    let days = elapsed.num_days();
    if days.abs() < 7 {
        return format!("{} {}", plural(days.abs(), "day"), suffix(days));
    }

    format_date(instant.date())
}

/// True when `instant` falls between now and the same time tomorrow.
pub fn is_within_next_day(instant: NaiveDateTime, now: NaiveDateTime) -> bool {
    instant >= now && instant <= now + Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn formats_like_the_booking_summary() {
        assert_eq!(format_date_time(at(15, 9, 30)), "Jan 15, 2024 9:30 AM");
        assert_eq!(format_date_time(at(5, 14, 0)), "Jan 05, 2024 2:00 PM");
        assert_eq!(format_time(at(5, 12, 0)), "12:00 PM");
        assert_eq!(format_date(at(5, 0, 0).date()), "Jan 05, 2024");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(1), "1 minute");
        assert_eq!(format_duration(30), "30 minutes");
        assert_eq!(format_duration(60), "1 hour");
        assert_eq!(format_duration(75), "1 hour 15 minutes");
        assert_eq!(format_duration(121), "2 hours 1 minute");
    }

    #[test]
    fn relative_dates() {
        let today = at(15, 0, 0).date();
        assert_eq!(relative_date(today, today), "Today");
        assert_eq!(relative_date(at(16, 0, 0).date(), today), "Tomorrow");
        assert_eq!(relative_date(at(14, 0, 0).date(), today), "Yesterday");
        assert_eq!(relative_date(at(20, 0, 0).date(), today), "Jan 20, 2024");
    }

    #[test]
    fn relative_times() {
        let now = at(15, 12, 0);
        assert_eq!(relative_time(at(15, 11, 55), now), "5 minutes ago");
        assert_eq!(relative_time(at(15, 15, 0), now), "3 hours from now");
        assert_eq!(relative_time(at(13, 12, 0), now), "2 days ago");
        assert_eq!(relative_time(at(16, 12, 0), now), "1 day from now");
        assert_eq!(relative_time(at(30, 12, 0), now), "Jan 30, 2024");
    }

    #[test]
    fn within_next_day() {
        let now = at(15, 12, 0);
        assert!(is_within_next_day(at(15, 14, 0), now));
        assert!(is_within_next_day(at(16, 12, 0), now));
        assert!(!is_within_next_day(at(16, 12, 30), now));
        assert!(!is_within_next_day(at(15, 11, 0), now));
    }
}
