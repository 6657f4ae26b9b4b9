use chrono::{DateTime, TimeZone, Utc};

/// Relative age of a unix timestamp, e.g. "5 minutes ago"
pub fn format_age(timestamp: i64, now: DateTime<Utc>) -> String {
    let then = match Utc.timestamp_opt(timestamp, 0).single() {
        Some(t) => t,
        None => return String::new(),
    };

    let secs = (now - then).num_seconds().max(0);
    let (amount, unit) = if secs < 60 {
        (secs, "second")
    } else if secs < 3600 {
        (secs / 60, "minute")
    } else if secs < 86_400 {
        (secs / 3600, "hour")
    } else {
        (secs / 86_400, "day")
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assert_eq!(format_age(1_700_000_000 - 30, now), "30 seconds ago");
        assert_eq!(format_age(1_700_000_000 - 60, now), "1 minute ago");
        assert_eq!(format_age(1_700_000_000 - 7200, now), "2 hours ago");
        assert_eq!(format_age(1_700_000_000 - 3 * 86_400, now), "3 days ago");
        assert_eq!(format_age(1_700_000_000 + 100, now), "0 seconds ago");
    }
}
