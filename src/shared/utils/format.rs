use chrono::{DateTime, Utc};

/// Render a byte count the way dataset cards show it.
///
/// Sub-kilobyte sizes stay in whole bytes; anything larger uses two decimals
/// in the next unit up (KB, MB, GB).
pub fn human_readable_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let size = bytes as f64;
    if size < KB {
        format!("{bytes} bytes")
    } else if size < MB {
        format!("{:.2} KB", size / KB)
    } else if size < GB {
        format!("{:.2} MB", size / MB)
    } else {
        format!("{:.2} GB", size / GB)
    }
}

/// Counter label shown above the result list.
pub fn results_found_label(count: usize) -> String {
    if count == 1 {
        "1 movie dataset found".to_string()
    } else {
        format!("{count} movie datasets found")
    }
}

/// Movie-count badge text on a result card.
pub fn movies_count_label(count: usize) -> String {
    if count == 1 {
        "1 movie".to_string()
    } else {
        format!("{count} movies")
    }
}

/// Upload timestamp in the long en-US form cards use,
/// e.g. "July 15, 2024, 3:42 PM".
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.format("%B %-d, %Y, %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_human_readable_size_bytes() {
        assert_eq!(human_readable_size(0), "0 bytes");
        assert_eq!(human_readable_size(512), "512 bytes");
        assert_eq!(human_readable_size(1023), "1023 bytes");
    }

    #[test]
    fn test_human_readable_size_units() {
        assert_eq!(human_readable_size(1024), "1.00 KB");
        assert_eq!(human_readable_size(2_516_582), "2.40 MB");
        assert_eq!(human_readable_size(5_368_709_120), "5.00 GB");
    }

    #[test]
    fn test_results_found_label() {
        assert_eq!(results_found_label(0), "0 movie datasets found");
        assert_eq!(results_found_label(1), "1 movie dataset found");
        assert_eq!(results_found_label(7), "7 movie datasets found");
    }

    #[test]
    fn test_movies_count_label() {
        assert_eq!(movies_count_label(0), "0 movies");
        assert_eq!(movies_count_label(1), "1 movie");
        assert_eq!(movies_count_label(12), "12 movies");
    }

    #[test]
    fn test_format_created_at_afternoon() {
        let created_at = Utc.with_ymd_and_hms(2024, 7, 15, 15, 42, 0).unwrap();
        assert_eq!(format_created_at(&created_at), "July 15, 2024, 3:42 PM");
    }

    #[test]
    fn test_format_created_at_morning_and_midnight() {
        let morning = Utc.with_ymd_and_hms(2024, 1, 3, 9, 5, 0).unwrap();
        assert_eq!(format_created_at(&morning), "January 3, 2024, 9:05 AM");

        let midnight = Utc.with_ymd_and_hms(2024, 12, 31, 0, 5, 0).unwrap();
        assert_eq!(format_created_at(&midnight), "December 31, 2024, 12:05 AM");
    }
}
