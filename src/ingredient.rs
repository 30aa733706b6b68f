//! Ingredient line parsing.
//!
//! Splits one raw ingredient line into amount, unit, and name, converting
//! imperial quantities to metric on the way through. Lines without a leading
//! quantity pass through whole; nothing here ever fails on odd input.

use crate::convert::{convert_to_metric, Quantity, RangeStyle};
use crate::model::{Confidence, ParsedIngredientLine};
use crate::normalize::normalize_values;
use crate::units::{classify, normalize_unit, UnitClass, UNIT_TOKENS_SORTED};

/// Read a plain number (integer or decimal) from the front of `s`.
/// Returns the value and its length in bytes.
fn leading_number(s: &str) -> Option<(f64, usize)> {
    let mut len = 0;
    let mut seen_dot = false;
    for b in s.bytes() {
        match b {
            b'0'..=b'9' => len += 1,
            b'.' if !seen_dot && len > 0 => {
                seen_dot = true;
                len += 1;
            }
            _ => break,
        }
    }
    if len == 0 {
        return None;
    }
    let text = s[..len].trim_end_matches('.');
    let value: f64 = text.parse().ok()?;
    Some((value, text.len()))
}

/// Match a leading numeric-or-range token ("2", "2.5", "1-2", "1 to 2").
/// Returns the quantity, the matched text, and its length in bytes.
fn match_quantity(s: &str) -> Option<(Quantity, usize)> {
    let (first, first_len) = leading_number(s)?;
    let after = &s[first_len..];

    // "a-b" with optional spaces around the dash
    let dash_side = after.trim_start_matches(' ');
    if let Some(dash_rest) = dash_side.strip_prefix('-') {
        let dash_rest_trimmed = dash_rest.trim_start_matches(' ');
        if let Some((second, second_len)) = leading_number(dash_rest_trimmed) {
            let total = s.len() - dash_rest_trimmed.len() + second_len;
            let quantity = Quantity::Range {
                low: first,
                high: second,
                style: RangeStyle::Dash,
            };
            return Some((quantity, total));
        }
    }

    // "a to b"
    if let Some(word_rest) = after.strip_prefix(' ') {
        let word_rest = word_rest.trim_start_matches(' ');
        let to_prefix = word_rest
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("to "));
        if to_prefix {
            let second_part = word_rest[3..].trim_start_matches(' ');
            if let Some((second, second_len)) = leading_number(second_part) {
                let total = s.len() - second_part.len() + second_len;
                let quantity = Quantity::Range {
                    low: first,
                    high: second,
                    style: RangeStyle::To,
                };
                return Some((quantity, total));
            }
        }
    }

    Some((Quantity::Single(first), first_len))
}

/// Match one known unit token at the front of `s`, longest alternative
/// first. Returns the canonical symbol and the number of bytes consumed
/// (including a trailing period, if any).
fn match_unit(s: &str) -> Option<(&'static str, usize)> {
    for &alias in UNIT_TOKENS_SORTED.iter() {
        if s.len() < alias.len() || !s.is_char_boundary(alias.len()) {
            continue;
        }
        let candidate = &s[..alias.len()];
        // Single-letter aliases are case-sensitive ("T" vs "t")
        let matched = if alias.len() == 1 {
            candidate == alias
        } else {
            candidate.eq_ignore_ascii_case(alias)
        };
        if !matched {
            continue;
        }
        let after = &s[alias.len()..];
        if !after.is_empty() && after.starts_with(|c: char| c.is_alphanumeric()) {
            continue;
        }
        if let Some(unit) = normalize_unit(candidate) {
            let mut consumed = alias.len();
            if after.starts_with('.') {
                consumed += 1;
            }
            return Some((unit, consumed));
        }
    }
    None
}

/// Parse one raw ingredient line.
///
/// The line is value-normalized first; a leading quantity plus a known
/// imperial unit routes through the metric converter, anything else passes
/// through unconverted at high confidence.
pub fn parse_ingredient_line(raw: &str) -> ParsedIngredientLine {
    let original = raw.trim();
    let normalized = normalize_values(original);

    let Some((quantity, amount_len)) = match_quantity(&normalized) else {
        return ParsedIngredientLine {
            original: original.to_string(),
            amount: String::new(),
            name: original.to_string(),
            converted: false,
            confidence: Confidence::High,
        };
    };

    let amount_text = normalized[..amount_len].trim();
    let remainder = normalized[amount_len..].trim_start();

    if let Some((unit, unit_len)) = match_unit(remainder) {
        let name = remainder[unit_len..].trim();
        match classify(unit) {
            UnitClass::ImperialVolume | UnitClass::ImperialWeight | UnitClass::ImperialLength => {
                let (amount, confidence) = convert_to_metric(quantity, unit, name);
                ParsedIngredientLine {
                    original: original.to_string(),
                    amount,
                    name: name.to_string(),
                    converted: true,
                    confidence,
                }
            }
            _ => ParsedIngredientLine {
                original: original.to_string(),
                amount: format!("{amount_text}{unit}"),
                name: name.to_string(),
                converted: false,
                confidence: Confidence::High,
            },
        }
    } else {
        ParsedIngredientLine {
            original: original.to_string(),
            amount: amount_text.to_string(),
            name: remainder.trim().to_string(),
            converted: false,
            confidence: Confidence::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imperial_volume_converts() {
        let parsed = parse_ingredient_line("1 cup flour");
        assert_eq!(parsed.amount, "120g");
        assert_eq!(parsed.name, "flour");
        assert!(parsed.converted);
        assert_eq!(parsed.confidence, Confidence::High);
    }

    #[test]
    fn test_range_with_dash() {
        let parsed = parse_ingredient_line("1-2 tbsp olive oil");
        assert!(parsed.converted);
        assert_eq!(parsed.amount, "15-30ml");
        assert_eq!(parsed.name, "olive oil");
    }

    #[test]
    fn test_range_with_to() {
        let parsed = parse_ingredient_line("1 to 2 tbsp olive oil");
        assert!(parsed.converted);
        assert_eq!(parsed.amount, "15 to 30ml");
        assert_eq!(parsed.name, "olive oil");
    }

    #[test]
    fn test_no_amount_keeps_whole_line() {
        let parsed = parse_ingredient_line("Salt to taste");
        assert_eq!(parsed.amount, "");
        assert_eq!(parsed.name, "Salt to taste");
        assert!(!parsed.converted);
        assert_eq!(parsed.confidence, Confidence::High);
    }

    #[test]
    fn test_metric_unit_passes_through() {
        let parsed = parse_ingredient_line("100 ml milk");
        assert_eq!(parsed.amount, "100ml");
        assert_eq!(parsed.name, "milk");
        assert!(!parsed.converted);
        assert_eq!(parsed.confidence, Confidence::High);
    }

    #[test]
    fn test_attached_metric_unit() {
        let parsed = parse_ingredient_line("400g spaghetti");
        assert_eq!(parsed.amount, "400g");
        assert_eq!(parsed.name, "spaghetti");
        assert!(!parsed.converted);
    }

    #[test]
    fn test_no_unit_keeps_bare_number() {
        let parsed = parse_ingredient_line("3 eggs");
        assert_eq!(parsed.amount, "3");
        assert_eq!(parsed.name, "eggs");
        assert!(!parsed.converted);
        assert_eq!(parsed.confidence, Confidence::High);
    }

    #[test]
    fn test_word_number_and_fraction() {
        let parsed = parse_ingredient_line("two cups sugar");
        assert_eq!(parsed.amount, "400g");
        assert!(parsed.converted);

        let parsed = parse_ingredient_line("½ cup sugar");
        assert_eq!(parsed.amount, "100g");
        assert!(parsed.converted);
    }

    #[test]
    fn test_mixed_number() {
        // 2.5 cups * 120 g/cup = 300g
        let parsed = parse_ingredient_line("2 1/2 cups flour");
        assert_eq!(parsed.amount, "300g");
        assert_eq!(parsed.name, "flour");
    }

    #[test]
    fn test_capital_t_is_tablespoon() {
        let parsed = parse_ingredient_line("1 T honey");
        assert!(parsed.converted);
        // 15ml = 1/16 cup; 340 g/cup honey -> 21g
        assert_eq!(parsed.amount, "21g");

        let parsed = parse_ingredient_line("1 t honey");
        // 5ml = 1/48 cup -> 7.1g
        assert_eq!(parsed.amount, "7.1g");
    }

    #[test]
    fn test_weight_with_period_abbreviation() {
        let parsed = parse_ingredient_line("8 oz. cream cheese");
        assert!(parsed.converted);
        assert_eq!(parsed.amount, "224g");
        assert_eq!(parsed.name, "cream cheese");
    }

    #[test]
    fn test_inch_unit() {
        let parsed = parse_ingredient_line("2 inch piece of ginger");
        assert!(parsed.converted);
        assert_eq!(parsed.amount, "5cm");
        assert_eq!(parsed.name, "piece of ginger");
    }

    #[test]
    fn test_original_preserved() {
        let parsed = parse_ingredient_line("  1 cup flour  ");
        assert_eq!(parsed.original, "1 cup flour");
    }

    #[test]
    fn test_determinism() {
        let a = parse_ingredient_line("1-2 tbsp olive oil");
        let b = parse_ingredient_line("1-2 tbsp olive oil");
        assert_eq!(a, b);
    }
}
