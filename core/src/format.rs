//! Clock display formatting

/// Format seconds as `m:ss`, switching to `h:mm:ss` once hours are
/// involved. Negative values clamp to `0:00`.
pub fn format_clock(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = total / 60 % 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(9.4), "0:09");
        assert_eq!(format_clock(65.0), "1:05");
        assert_eq!(format_clock(900.0), "15:00");
        assert_eq!(format_clock(3599.9), "59:59");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_clock(3600.0), "1:00:00");
        assert_eq!(format_clock(3661.0), "1:01:01");
        assert_eq!(format_clock(7325.0), "2:02:05");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(format_clock(-5.0), "0:00");
    }
}
