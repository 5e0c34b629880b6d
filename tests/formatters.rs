#[cfg(test)]
mod tests {
    use chrono::Duration;
    use tock::libs::config::DATETIME_FORMAT;
    use tock::libs::formatter::{format_duration, format_timestamp, parse_timestamp};

    #[test]
    fn test_format_duration_pads_hours_and_minutes() {
        assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(30))), "02:30");
        assert_eq!(format_duration(&Duration::minutes(30)), "00:30");
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(45))), "08:45");
    }

    #[test]
    fn test_format_duration_rounds_down_to_minutes() {
        assert_eq!(format_duration(&Duration::seconds(59)), "00:00");
        assert_eq!(format_duration(&Duration::seconds(3540)), "00:59");
    }

    #[test]
    fn test_negative_duration_renders_as_zero() {
        assert_eq!(format_duration(&Duration::seconds(-10)), "00:00");
    }

    #[test]
    fn test_timestamp_parse_format_round_trip() {
        let epoch = parse_timestamp("2025-01-15 14:30", DATETIME_FORMAT).unwrap();
        assert_eq!(format_timestamp(epoch, DATETIME_FORMAT), "2025-01-15 14:30");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_timestamp("not a time", DATETIME_FORMAT).is_none());
        assert!(parse_timestamp("2025-01-15", DATETIME_FORMAT).is_none());
    }
}
