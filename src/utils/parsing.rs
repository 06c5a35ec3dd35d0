use chrono::{NaiveDate, NaiveDateTime};

use crate::utils::constants::TRUTHY_TOKENS;

/// Timestamp layouts observed in the accident dataset exports
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a numeric field, treating anything unparseable as missing
pub fn parse_float(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a numeric value the way it is written back to CSV
pub fn format_float(value: f64) -> String {
    value.to_string()
}

/// Parse a timestamp field, trying each supported layout in order.
/// Date-only values are promoted to midnight.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Tolerant string-to-boolean coercion. Anything outside the accepted
/// truthy token set (including empty input) is false.
pub fn parse_truthy(value: &str) -> bool {
    let token = value.trim().to_lowercase();
    TRUTHY_TOKENS.contains(&token.as_str())
}

/// Extract the first run of 5 consecutive ASCII digits, e.g. "ab12345xy" -> "12345"
pub fn extract_zipcode(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    if bytes.len() < 5 {
        return None;
    }
    for start in 0..=bytes.len() - 5 {
        if bytes[start..start + 5].iter().all(u8::is_ascii_digit) {
            return Some(value[start..start + 5].to_string());
        }
    }
    None
}

/// Parse a coordinate and reject values outside the axis bounds.
/// Out-of-range values become missing, never clamped.
pub fn validate_coordinate(value: &str, min: f64, max: f64) -> Option<f64> {
    parse_float(value).filter(|v| (min..=max).contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{MAX_LATITUDE, MIN_LATITUDE};

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("36.9"), Some(36.9));
        assert_eq!(parse_float(" -5.2 "), Some(-5.2));
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("n/a"), None);
        assert_eq!(parse_float("NaN"), None);
    }

    #[test]
    fn test_parse_datetime_layouts() {
        let parsed = parse_datetime("2016-02-08 05:46:00").unwrap();
        assert_eq!(parsed.format("%H").to_string(), "05");

        assert!(parse_datetime("2016-02-08 05:46:00.000000000").is_some());
        assert!(parse_datetime("2016-02-08T05:46:00").is_some());
        assert!(parse_datetime("2016-02-08").is_some());
        assert!(parse_datetime("not a date").is_none());
        assert!(parse_datetime("").is_none());
    }

    #[test]
    fn test_parse_truthy() {
        assert!(parse_truthy("true"));
        assert!(parse_truthy("TRUE"));
        assert!(parse_truthy(" Yes "));
        assert!(parse_truthy("1"));
        assert!(parse_truthy("t"));
        assert!(!parse_truthy("false"));
        assert!(!parse_truthy("0"));
        assert!(!parse_truthy(""));
        assert!(!parse_truthy("maybe"));
    }

    #[test]
    fn test_extract_zipcode() {
        assert_eq!(extract_zipcode("ab12345xy"), Some("12345".to_string()));
        assert_eq!(extract_zipcode("91706"), Some("91706".to_string()));
        assert_eq!(extract_zipcode("91706-2134"), Some("91706".to_string()));
        assert_eq!(extract_zipcode("1234"), None);
        assert_eq!(extract_zipcode(""), None);
        assert_eq!(extract_zipcode("12a34567"), Some("34567".to_string()));
    }

    #[test]
    fn test_validate_coordinate() {
        assert_eq!(
            validate_coordinate("45.5", MIN_LATITUDE, MAX_LATITUDE),
            Some(45.5)
        );
        assert_eq!(validate_coordinate("95.0", MIN_LATITUDE, MAX_LATITUDE), None);
        assert_eq!(
            validate_coordinate("-90.0", MIN_LATITUDE, MAX_LATITUDE),
            Some(-90.0)
        );
        assert_eq!(validate_coordinate("abc", MIN_LATITUDE, MAX_LATITUDE), None);
    }
}
