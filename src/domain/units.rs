// src/domain/units.rs

use crate::domain::listing::Cell;

/// Placeholder written for absent values.
pub const ABSENT: &str = "Nil";

/// How a column is annotated for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Free text, never annotated.
    Text,
    /// Number without a unit.
    Plain,
    /// Currency symbol prefix, thousands separators, two decimals.
    Currency,
    /// Number followed by a space and a unit token.
    Suffix(&'static str),
}

impl Unit {
    /// Excel number format matching the display annotation.
    pub fn num_format(self, currency: &str) -> Option<String> {
        match self {
            Unit::Text | Unit::Plain => None,
            Unit::Currency => Some(format!("{currency}#,##0.00")),
            Unit::Suffix("GHz") => Some("0.0 \"GHz\"".to_string()),
            Unit::Suffix(unit) => Some(format!("0 \"{unit}\"")),
        }
    }
}

/// Integral values print without decimals ("4500"), others as-is ("2.2").
pub fn display_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Two decimals with comma thousands separators: 30000 -> "30,000.00".
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Renders a raw cell as a display string for a column with `unit`.
/// Text that does not read as a number is kept verbatim.
pub fn annotate(cell: &Cell, unit: Unit, currency: &str) -> String {
    let value = match cell {
        Cell::Number(value) => Some(*value),
        Cell::Text(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
    };

    match (unit, value) {
        (Unit::Text, _) | (_, None) => cell.to_display().trim().to_string(),
        (Unit::Plain, Some(value)) => display_number(value),
        (Unit::Currency, Some(value)) => format!("{currency}{}", group_thousands(value)),
        (Unit::Suffix(token), Some(value)) => format!("{} {token}", display_number(value)),
    }
}

/// Recovers the number behind a display string ("8 GB", "₹12,999.00").
/// Returns `None` for anything that is not a finite number once the
/// currency symbol, separators and a trailing unit token are removed.
pub fn strip_annotation(display: &str, currency: &str) -> Option<f64> {
    let mut text = display.trim().replace(',', "");
    if !currency.is_empty() {
        text = text.replace(currency, "");
    }

    let number = match text.trim().rsplit_once(char::is_whitespace) {
        Some((number, unit)) if !unit.is_empty() && unit.chars().all(char::is_alphabetic) => {
            number.trim()
        }
        _ => text.trim(),
    };

    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// First letter upper case, the rest lower case ("MEDIATEK" -> "Mediatek").
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotates_each_unit() {
        assert_eq!(annotate(&Cell::Number(30000.0), Unit::Currency, "₹"), "₹30,000.00");
        assert_eq!(annotate(&Cell::Number(4500.0), Unit::Suffix("mAh"), "₹"), "4500 mAh");
        assert_eq!(annotate(&Cell::Number(8.0), Unit::Suffix("GB"), "₹"), "8 GB");
        assert_eq!(annotate(&Cell::Number(2.2), Unit::Suffix("GHz"), "₹"), "2.2 GHz");
        assert_eq!(annotate(&Cell::Number(50.0), Unit::Plain, "₹"), "50");
    }

    #[test]
    fn numeric_text_is_annotated_and_other_text_kept() {
        assert_eq!(annotate(&Cell::Text(" 128 ".into()), Unit::Suffix("GB"), "₹"), "128 GB");
        assert_eq!(annotate(&Cell::Text("Nil".into()), Unit::Currency, "₹"), "Nil");
        assert_eq!(annotate(&Cell::Number(7.0), Unit::Text, "₹"), "7");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0.0), "0.00");
        assert_eq!(group_thousands(999.5), "999.50");
        assert_eq!(group_thousands(1000.0), "1,000.00");
        assert_eq!(group_thousands(12999.0), "12,999.00");
        assert_eq!(group_thousands(1234567.891), "1,234,567.89");
        assert_eq!(group_thousands(-1500.0), "-1,500.00");
    }

    #[test]
    fn strips_annotations_back_to_numbers() {
        assert_eq!(strip_annotation("8 GB", "₹"), Some(8.0));
        assert_eq!(strip_annotation("₹12,999.00", "₹"), Some(12999.0));
        assert_eq!(strip_annotation("4500 mAh", "₹"), Some(4500.0));
        assert_eq!(strip_annotation("2.2 GHz", "₹"), Some(2.2));
        assert_eq!(strip_annotation("50", "₹"), Some(50.0));
    }

    #[test]
    fn separators_are_stripped_without_a_currency_symbol() {
        let shown = annotate(&Cell::Number(30000.0), Unit::Currency, "");
        assert_eq!(shown, "30,000.00");
        assert_eq!(strip_annotation(&shown, ""), Some(30000.0));
        assert_eq!(strip_annotation("1,234,567.89", "$"), Some(1234567.89));
    }

    #[test]
    fn rejects_unparseable_values() {
        assert_eq!(strip_annotation("Nil", "₹"), None);
        assert_eq!(strip_annotation("", "₹"), None);
        assert_eq!(strip_annotation("about 8 GB", "₹"), None);
        assert_eq!(strip_annotation("inf", "₹"), None);
    }

    #[test]
    fn annotation_round_trips() {
        for (value, unit) in [
            (30000.0, Unit::Currency),
            (4500.0, Unit::Suffix("mAh")),
            (2.2, Unit::Suffix("GHz")),
            (16.0, Unit::Plain),
        ] {
            let shown = annotate(&Cell::Number(value), unit, "₹");
            assert_eq!(strip_annotation(&shown, "₹"), Some(value), "{shown}");
        }
    }

    #[test]
    fn capitalizes_like_a_title_word() {
        assert_eq!(capitalize("nothing"), "Nothing");
        assert_eq!(capitalize("MEDIATEK"), "Mediatek");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn excel_formats_follow_units() {
        assert_eq!(Unit::Currency.num_format("₹").as_deref(), Some("₹#,##0.00"));
        assert_eq!(Unit::Suffix("mAh").num_format("₹").as_deref(), Some("0 \"mAh\""));
        assert_eq!(Unit::Suffix("GHz").num_format("₹").as_deref(), Some("0.0 \"GHz\""));
        assert_eq!(Unit::Plain.num_format("₹"), None);
    }
}
