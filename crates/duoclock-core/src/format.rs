use crate::timestamp::Timestamp;

/// Text shown in the 12-hour region before the first tick. Cosmetic only.
pub const PLACEHOLDER_12H: &str = "00:00:00 AM";

/// Text shown in the 24-hour region before the first tick. Cosmetic only.
pub const PLACEHOLDER_24H: &str = "00:00:00";

/// Formats a timestamp as `HH:MM:SS AM|PM`.
///
/// Hours are zero-padded in 01..=12: hour 0 renders as `12 … AM`
/// (midnight) and hour 12 as `12 … PM` (noon).
pub fn format_12h(ts: Timestamp) -> String {
    let meridiem = if ts.hour < 12 { "AM" } else { "PM" };
    let hour = match ts.hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour:02}:{:02}:{:02} {meridiem}", ts.minute, ts.second)
}

/// Formats a timestamp as `HH:MM:SS` with hours in 00..=23.
pub fn format_24h(ts: Timestamp) -> String {
    format!("{:02}:{:02}:{:02}", ts.hour, ts.minute, ts.second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(h: u8, m: u8, s: u8) -> Timestamp {
        Timestamp::new(h, m, s).unwrap()
    }

    #[test]
    fn both_forms_agree_on_the_same_instant() {
        assert_eq!(format_24h(ts(0, 0, 5)), "00:00:05");
        assert_eq!(format_12h(ts(0, 0, 5)), "12:00:05 AM");

        assert_eq!(format_24h(ts(13, 30, 0)), "13:30:00");
        assert_eq!(format_12h(ts(13, 30, 0)), "01:30:00 PM");

        assert_eq!(format_24h(ts(23, 59, 59)), "23:59:59");
        assert_eq!(format_12h(ts(23, 59, 59)), "11:59:59 PM");
    }

    #[test]
    fn midnight_renders_as_twelve_am() {
        assert_eq!(format_12h(ts(0, 15, 30)), "12:15:30 AM");
    }

    #[test]
    fn noon_renders_as_twelve_pm() {
        assert_eq!(format_12h(ts(12, 0, 0)), "12:00:00 PM");
    }

    #[test]
    fn morning_hours_are_zero_padded() {
        assert_eq!(format_12h(ts(9, 5, 7)), "09:05:07 AM");
        assert_eq!(format_24h(ts(9, 5, 7)), "09:05:07");
    }

    #[test]
    fn formatters_are_pure() {
        let t = ts(7, 42, 1);
        assert_eq!(format_12h(t), format_12h(t));
        assert_eq!(format_24h(t), format_24h(t));
    }

    #[test]
    fn placeholders_match_the_output_shape() {
        assert_eq!(PLACEHOLDER_12H.len(), format_12h(ts(1, 2, 3)).len());
        assert_eq!(PLACEHOLDER_24H.len(), format_24h(ts(1, 2, 3)).len());
    }
}
