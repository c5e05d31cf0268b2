//! Value formatting shared by the stat components.

use chrono::{DateTime, NaiveDate, Utc};

/// Format presets for stat values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Number,
    Currency,
    Date,
    Datetime,
    Bytes,
}

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Return whether a displayed value reads as a number.
///
/// Blank strings count as numeric, matching how untyped UI values coerce.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.parse::<f64>().map(|v| !v.is_nan()).unwrap_or(false)
}

/// Apply a format preset. Values that don't parse are returned unchanged.
pub fn format_value(value: &str, format: Option<ValueFormat>) -> String {
    let Some(format) = format else {
        return value.to_string();
    };

    match format {
        ValueFormat::Date | ValueFormat::Datetime => {
            match parse_timestamp(value) {
                Some(at) if format == ValueFormat::Date => {
                    at.format("%-m/%-d/%Y").to_string()
                },
                Some(at) => at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
                None => value.to_string(),
            }
        },
        ValueFormat::Number | ValueFormat::Currency | ValueFormat::Bytes => {
            let Ok(number) = value.trim().parse::<f64>() else {
                return value.to_string();
            };
            if !number.is_finite() {
                return value.to_string();
            }

            match format {
                ValueFormat::Number => format_number(number, 3),
                ValueFormat::Currency => format_currency(number),
                _ => format_bytes(number),
            }
        },
    }
}

/// Group thousands with commas and keep at most `max_fraction` decimals.
pub fn format_number(value: f64, max_fraction: usize) -> String {
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => {
            (int_part, frac_part.trim_end_matches('0'))
        },
        None => (fixed.as_str(), ""),
    };

    let mut out = String::new();
    if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// US dollars with two decimals.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) =
        fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// 1024-based size with up to two decimals.
pub fn format_bytes(bytes: f64) -> String {
    if bytes == 0.0 {
        return String::from("0 B");
    }
    if bytes < 0.0 {
        return format!("-{}", format_bytes(-bytes));
    }

    let exponent = (bytes.ln() / 1024_f64.ln()).floor().max(0.0) as usize;
    let exponent = exponent.min(BYTE_UNITS.len() - 1);
    let scaled = bytes / 1024_f64.powi(exponent as i32);
    let rounded = format!("{scaled:.2}");
    let rounded = rounded.trim_end_matches('0').trim_end_matches('.');

    format!("{rounded} {}", BYTE_UNITS[exponent])
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Epoch milliseconds, RFC 3339 or `YYYY-MM-DD`, all read as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(millis) = trimmed.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis);
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_use_binary_units_with_two_decimals() {
        assert_eq!(format_bytes(0.0), "0 B");
        assert_eq!(format_bytes(512.0), "512 B");
        assert_eq!(format_bytes(1024.0), "1 KB");
        assert_eq!(format_bytes(1536.0), "1.5 KB");
        assert_eq!(format_bytes(1_288_490_189.0), "1.2 GB");
        assert_eq!(format_bytes(5.0 * 1024_f64.powi(5)), "5120 TB");
    }

    #[test]
    fn numbers_group_thousands() {
        assert_eq!(format_number(1234567.0, 3), "1,234,567");
        assert_eq!(format_number(-1234.5, 3), "-1,234.5");
        assert_eq!(format_number(0.12345, 3), "0.123");
        assert_eq!(format_number(999.0, 3), "999");
    }

    #[test]
    fn currency_is_usd_with_cents() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-42.0), "-$42.00");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn dates_accept_epoch_millis_and_iso_strings() {
        assert_eq!(
            format_value("1705276800000", Some(ValueFormat::Date)),
            "1/15/2024"
        );
        assert_eq!(
            format_value("2024-01-15", Some(ValueFormat::Date)),
            "1/15/2024"
        );
        assert_eq!(
            format_value("2024-01-15T15:04:05Z", Some(ValueFormat::Datetime)),
            "1/15/2024, 3:04:05 PM"
        );
    }

    #[test]
    fn unparseable_values_are_returned_unchanged() {
        assert_eq!(format_value("n/a", Some(ValueFormat::Bytes)), "n/a");
        assert_eq!(format_value("soon", Some(ValueFormat::Date)), "soon");
        assert_eq!(format_value("42", None), "42");
    }

    #[test]
    fn numeric_detection_matches_loose_coercion() {
        assert!(is_numeric("42"));
        assert!(is_numeric(" 3.5 "));
        assert!(is_numeric(""));
        assert!(!is_numeric("12 users"));
        assert!(!is_numeric("NaN"));
    }
}
