use crate::api::LogRecord;

/// Truncate a timestamp to two digits after the fractional-seconds separator.
///
/// Strings without a `.` are returned unchanged, and shorter fractions are
/// kept as-is without padding.
pub fn truncate_timestamp(timestamp: &str) -> &str {
    match timestamp.find('.') {
        Some(dot) => {
            let fraction = &timestamp[dot + 1..];
            let end = fraction
                .char_indices()
                .nth(2)
                .map(|(i, _)| dot + 1 + i)
                .unwrap_or(timestamp.len());
            &timestamp[..end]
        }
        None => timestamp,
    }
}

/// Format a record as an output line: `<timestamp> - <message>\n`
pub fn format_entry(record: &LogRecord) -> String {
    format!(
        "{} - {}\n",
        truncate_timestamp(&record.timestamp),
        record.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_microseconds() {
        assert_eq!(
            truncate_timestamp("2023-05-01T12:00:00.123456"),
            "2023-05-01T12:00:00.12"
        );
    }

    #[test]
    fn test_truncate_without_fraction() {
        assert_eq!(
            truncate_timestamp("2023-05-01T12:00:00"),
            "2023-05-01T12:00:00"
        );
    }

    #[test]
    fn test_truncate_short_fraction_not_padded() {
        assert_eq!(
            truncate_timestamp("2023-05-01T12:00:00.1"),
            "2023-05-01T12:00:00.1"
        );
        assert_eq!(truncate_timestamp("12:00:00."), "12:00:00.");
    }

    #[test]
    fn test_truncate_keeps_suffix_cut() {
        // Timezone suffix after the fraction is cut along with the digits
        assert_eq!(
            truncate_timestamp("2023-05-01T12:00:00.123456Z"),
            "2023-05-01T12:00:00.12"
        );
    }

    #[test]
    fn test_truncate_multibyte_after_dot() {
        assert_eq!(truncate_timestamp("x.éèà"), "x.éè");
    }

    #[test]
    fn test_format_entry() {
        let record = LogRecord {
            timestamp: "2024-01-01T10:00:00.987654".to_string(),
            message: "GET / 200".to_string(),
        };
        assert_eq!(format_entry(&record), "2024-01-01T10:00:00.98 - GET / 200\n");
    }
}
