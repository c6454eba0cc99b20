//! Display formatting of numbers, money, dates and summary values

use chrono::{NaiveDate, NaiveDateTime};
use contracts::shared::record_list::{Average, Cell, StatValue};

/// Shown for an absent value
pub const PLACEHOLDER: &str = "—";

/// Formats a number with a thousands separator (comma) and the given number of decimals:
/// `1234.567` with 2 decimals becomes `"1,234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_count(value: usize) -> String {
    format_number_with_decimals(value as f64, 0)
}

/// Rupee amount without paise
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-₹{}", format_number_with_decimals(-value, 0))
    } else {
        format!("₹{}", format_number_with_decimals(value, 0))
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// "N/A" when the average has no records behind it
pub fn format_average(value: &Average, decimals: u8) -> String {
    match value.value() {
        Some(v) => format_number_with_decimals(v, decimals),
        None => value.to_string(),
    }
}

pub fn format_percent(value: &Average) -> String {
    match value.value() {
        Some(v) => format!("{}%", format_number_with_decimals(v, 1)),
        None => value.to_string(),
    }
}

pub fn format_stat(value: &StatValue) -> String {
    match value {
        StatValue::Count(n) => format_count(*n),
        StatValue::Amount(v) => format_money(*v),
        StatValue::Average { value, decimals } => format_average(value, *decimals),
        StatValue::Percent(value) => format_percent(value),
    }
}

/// Plain text of a cell, used for table cells and tooltips
pub fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.clone(),
        Cell::Chip(chip) => chip.label.to_string(),
        Cell::Money(v) => format_money(*v),
        Cell::Date(d) => format_date(*d),
        Cell::Progress(p) => format!("{}%", p),
        Cell::Flag(true) => "Yes".to_string(),
        Cell::Flag(false) => "No".to_string(),
        Cell::Tags(tags) if tags.is_empty() => PLACEHOLDER.to_string(),
        Cell::Tags(tags) => tags.join(", "),
        Cell::Empty => PLACEHOLDER.to_string(),
    }
}

/// Time line of the header clock, e.g. "09:05:03"
pub fn format_clock_time(now: NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Date line of the header clock, e.g. "Friday, 15 Mar 2024"
pub fn format_clock_date(now: NaiveDateTime) -> String {
    now.format("%A, %d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1,234,567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-123456.5, 1), "-123,456.5");
        assert_eq!(format_number_with_decimals(0.0, 1), "0.0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1391300.0), "₹1,391,300");
        assert_eq!(format_money(0.0), "₹0");
        assert_eq!(format_money(-2500.0), "-₹2,500");
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(&StatValue::Count(17450)), "17,450");
        assert_eq!(format_stat(&StatValue::Amount(406650.0)), "₹406,650");
        assert_eq!(
            format_stat(&StatValue::Average {
                value: Average::Value(44.5),
                decimals: 1
            }),
            "44.5"
        );
        assert_eq!(
            format_stat(&StatValue::Percent(Average::Value(50.0))),
            "50.0%"
        );
    }

    #[test]
    fn test_not_applicable_is_never_nan() {
        let na = StatValue::Average {
            value: Average::NotApplicable,
            decimals: 1,
        };
        assert_eq!(format_stat(&na), "N/A");
        assert_eq!(format_stat(&StatValue::Percent(Average::NotApplicable)), "N/A");
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Cell::Date(date(2024, 3, 15))), "15 Mar 2024");
        assert_eq!(cell_text(&Cell::Progress(75)), "75%");
        assert_eq!(cell_text(&Cell::Flag(true)), "Yes");
        assert_eq!(cell_text(&Cell::Tags(vec![])), PLACEHOLDER);
        assert_eq!(
            cell_text(&Cell::Tags(vec!["a".into(), "b".into()])),
            "a, b"
        );
        assert_eq!(cell_text(&Cell::Empty), PLACEHOLDER);
    }

    #[test]
    fn test_clock_lines() {
        let now = date(2024, 3, 15).and_hms_opt(9, 5, 3).unwrap();
        assert_eq!(format_clock_time(now), "09:05:03");
        assert_eq!(format_clock_date(now), "Friday, 15 Mar 2024");
    }
}
