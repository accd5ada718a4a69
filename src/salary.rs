use log::warn;
use regex::Regex;

/// Parses free-text salary pills ("3.138,19 €", "2.000 € - 3.000 €, jährlich")
/// into a canonical monthly amount. German number format: '.' groups
/// thousands, ',' is the decimal separator.
pub struct SalaryNormalizer {
    token_regex: Regex,
}

impl SalaryNormalizer {
    pub fn new() -> Self {
        SalaryNormalizer {
            // thousands-grouped with optional decimal comma, or a plain
            // digit run with optional decimal comma
            token_regex: Regex::new(r"\d{1,3}(?:\.\d{3})+(?:,\d+)?|\d+(?:,\d+)?").unwrap(),
        }
    }

    /// Returns the monthly amount, or None when the fragment carries no
    /// recognizable number. Zero is a valid amount, distinct from None.
    pub fn normalize(&self, raw: &str) -> Option<f64> {
        let lower = raw.to_lowercase();
        let yearly = lower.contains("jährlich") || lower.contains("pro jahr");
        let monthly = lower.contains("monatlich") || lower.contains("pro monat");

        // Drop everything that is not part of a number or a range before
        // tokenizing, so "€" and period words cannot split tokens.
        let stripped: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '–'))
            .collect();

        let tokens: Vec<f64> = self
            .token_regex
            .find_iter(&stripped)
            .filter_map(|m| parse_german_number(m.as_str()))
            .collect();

        let value = match tokens.len() {
            0 => return None,
            1 => tokens[0],
            2 => (tokens[0] + tokens[1]) / 2.0,
            n => {
                // Ambiguous fragment; fall back to the first two tokens.
                warn!("Salary fragment {:?} contains {} numeric tokens, using first two", raw, n);
                (tokens[0] + tokens[1]) / 2.0
            }
        };

        let value = if yearly && !monthly { value / 12.0 } else { value };
        Some((value * 100.0).round() / 100.0)
    }
}

/// "3.138,19" -> 3138.19
fn parse_german_number(token: &str) -> Option<f64> {
    token.replace('.', "").replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> Option<f64> {
        SalaryNormalizer::new().normalize(raw)
    }

    #[test]
    fn test_grouped_decimal_amount() {
        assert_eq!(normalize("3.138,19 €"), Some(3138.19));
    }

    #[test]
    fn test_yearly_range_averaged_and_divided() {
        // (2000 + 3000) / 2 / 12 = 208.33...
        assert_eq!(normalize("2.000 € - 3.000 €, jährlich"), Some(208.33));
    }

    #[test]
    fn test_monthly_marker_means_no_division() {
        assert_eq!(normalize("50.000 € monatlich"), Some(50000.0));
    }

    #[test]
    fn test_no_period_marker_treated_as_monthly() {
        assert_eq!(normalize("ab 2.800 €"), Some(2800.0));
    }

    #[test]
    fn test_no_digits_yields_none() {
        assert_eq!(normalize("attraktives Gehalt"), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn test_zero_is_valid_and_distinct_from_absent() {
        assert_eq!(normalize("0 €"), Some(0.0));
    }

    #[test]
    fn test_plain_number_without_grouping() {
        assert_eq!(normalize("2500 € pro Monat"), Some(2500.0));
    }

    #[test]
    fn test_more_than_two_tokens_falls_back_to_first_two() {
        assert_eq!(normalize("1.000 € - 2.000 € - 9.000 €"), Some(1500.0));
    }

    #[test]
    fn test_yearly_equals_monthly_equivalent_divided_by_twelve() {
        let monthly = normalize("4.800 €").unwrap();
        let yearly = normalize("4.800 € jährlich").unwrap();
        assert!((yearly - monthly / 12.0).abs() < 0.01);
    }

    #[test]
    fn test_en_dash_range() {
        assert_eq!(normalize("3.000 – 3.500 € brutto"), Some(3250.0));
    }
}
