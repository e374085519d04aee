use std::time::Duration;

/// Formats a duration as an RFC 5545 / ISO 8601 duration value, e.g.
/// `PT1H`, `P1DT12H` or `PT1M30S`.
///
/// Sub-second precision is dropped. A zero duration is `PT0S`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if total == 0 {
        return "PT0S".to_string();
    }

    let mut out = String::from("P");
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || seconds > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if seconds > 0 {
            out.push_str(&format!("{seconds}S"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_duration(Duration::from_secs(3_600)), "PT1H");
    }

    #[test]
    fn test_format_mixed() {
        assert_eq!(format_duration(Duration::from_secs(90)), "PT1M30S");
        assert_eq!(format_duration(Duration::from_secs(5_400)), "PT1H30M");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_duration(Duration::from_secs(86_400)), "P1D");
        assert_eq!(format_duration(Duration::from_secs(129_600)), "P1DT12H");
    }

    #[test]
    fn test_format_zero_and_subsecond() {
        assert_eq!(format_duration(Duration::ZERO), "PT0S");
        assert_eq!(format_duration(Duration::from_millis(500)), "PT0S");
        assert_eq!(format_duration(Duration::from_millis(1_500)), "PT1S");
    }
}
