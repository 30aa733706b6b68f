//! Shopping-list ingredient merging.
//!
//! Parses ingredient lines with a grammar tuned for display and grouping
//! rather than metric conversion, normalizes names, and merges duplicates
//! across recipes. The unit-alias lexicon here is deliberately separate from
//! the conversion lexicon in `units` (note lowercase "l" for liter, count
//! units like "clove"); unifying the two would change how the shopping list
//! groups entries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single shopping-list entry as stored by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// The ingredient name (e.g. "chicken breast", "olive oil")
    pub ingredient: String,
    /// The amount as a string (e.g. "2", "1/2", "400")
    pub amount: String,
    /// The unit of measurement (e.g. "cups", "tbsp", "g", "")
    pub unit: String,
    /// The recipe this ingredient came from
    pub recipe_slug: String,
    /// Original raw ingredient string from the recipe
    pub raw: String,
}

/// Merged ingredient for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MergedIngredient {
    pub amount: Option<f64>,
    pub unit: String,
    pub name: String,
    #[serde(rename = "sourceRecipes")]
    pub source_recipes: Vec<String>,
}

/// Parsed ingredient data, display-oriented.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    pub amount: Option<f64>,
    pub unit: String,
    pub name: String,
    pub raw: String,
}

/// Display-lexicon aliases (spelling -> canonical, both lowercase).
const UNIT_ALIASES: &[(&str, &str)] = &[
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("tbs", "tbsp"),
    ("tb", "tbsp"),
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    ("cups", "cup"),
    ("ounce", "oz"),
    ("ounces", "oz"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("lbs", "lb"),
    ("gram", "g"),
    ("grams", "g"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("milliliter", "ml"),
    ("milliliters", "ml"),
    ("millilitre", "ml"),
    ("millilitres", "ml"),
    ("liter", "l"),
    ("liters", "l"),
    ("litre", "l"),
    ("litres", "l"),
    ("pinches", "pinch"),
    ("cloves", "clove"),
    ("pieces", "piece"),
    ("bunches", "bunch"),
    ("cans", "can"),
    ("slices", "slice"),
    ("sprigs", "sprig"),
    ("heads", "head"),
];

/// Units that can sit directly against the number ("400g"), longest first
/// so "ml" wins over "l".
const ATTACHED_UNITS: &[&str] = &["kg", "ml", "mg", "cl", "dl", "oz", "lb", "g", "l"];

/// Canonical unit words accepted when separated from the number by a space.
const KNOWN_UNITS: &[&str] = &[
    "tbsp", "tsp", "cup", "oz", "lb", "pinch", "clove", "piece", "bunch", "can", "slice", "sprig",
    "head", "large", "medium", "small",
];

/// Adjectives that do not affect an ingredient's identity.
const IGNORED_ADJECTIVES: &[&str] = &[
    "fresh", "dried", "chopped", "minced", "diced", "sliced", "grated", "crushed", "whole",
    "ground", "large", "medium", "small",
];

/// Irregular plurals (and words the suffix rules would mangle).
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("tomatoes", "tomato"),
    ("potatoes", "potato"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("loaves", "loaf"),
    ("cloves", "clove"),
    ("olives", "olive"),
];

/// Normalize a unit spelling for grouping (lowercase; unknown spellings pass
/// through unchanged).
pub fn normalize_merge_unit(unit: &str) -> String {
    let lower = unit.trim().to_lowercase();
    UNIT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(lower)
}

fn is_known_unit(word: &str) -> bool {
    KNOWN_UNITS.contains(&word)
        || ATTACHED_UNITS.contains(&word)
        || UNIT_ALIASES.iter().any(|(alias, _)| *alias == word)
}

/// Parse "n/d" with optional spaces around the slash.
fn parse_fraction(s: &str) -> Option<f64> {
    let (numerator, denominator) = s.split_once('/')?;
    let numerator: f64 = numerator.trim().parse().ok()?;
    let denominator: f64 = denominator.trim().parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Parse an integer, decimal, fraction, or mixed number ("1 1/2").
fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if let Some((whole, frac)) = trimmed.split_once(char::is_whitespace) {
        if let (Ok(whole), Some(frac)) = (whole.parse::<f64>(), parse_fraction(frac.trim())) {
            return Some(whole + frac);
        }
    }
    if let Some(frac) = parse_fraction(trimmed) {
        return Some(frac);
    }
    trimmed.parse().ok()
}

/// Read the leading amount token off `s`: integer, decimal, fraction, or
/// mixed number. Returns the token and the remainder.
fn split_amount(s: &str) -> Option<(&str, &str)> {
    let digits = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &s[digits..];

    // "1/2"
    if let Some(frac_rest) = rest.strip_prefix('/') {
        let denom = frac_rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if denom > 0 {
            let len = digits + 1 + denom;
            return Some((&s[..len], &s[len..]));
        }
    }

    // "2.5"
    if rest.starts_with('.') {
        let decimals = rest[1..].bytes().take_while(|b| b.is_ascii_digit()).count();
        if decimals > 0 {
            let len = digits + 1 + decimals;
            return Some((&s[..len], &s[len..]));
        }
    }

    // "1 1/2"
    if let Some(space_rest) = rest.strip_prefix(' ') {
        let second = space_rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if second > 0 {
            if let Some(frac_rest) = space_rest[second..].strip_prefix('/') {
                let denom = frac_rest.bytes().take_while(|b| b.is_ascii_digit()).count();
                if denom > 0 {
                    let len = digits + 1 + second + 1 + denom;
                    return Some((&s[..len], &s[len..]));
                }
            }
        }
    }

    Some((&s[..digits], rest))
}

/// Parse an ingredient string into amount, unit, and name.
///
/// Handles "400g spaghetti" (attached unit), "2 tbsp olive oil",
/// "1/2 tsp salt", "2 lemons, zested", and "Salt and pepper to taste"
/// (no amount at all).
pub fn parse_ingredient(ingredient_str: &str) -> ParsedIngredient {
    let raw = ingredient_str.trim();

    // Amount with attached unit, e.g. "400g", "100ml"
    if let Some((amount_str, rest)) = split_amount(raw) {
        if !amount_str.contains([' ', '/']) {
            for &unit in ATTACHED_UNITS {
                let matches = rest
                    .get(..unit.len())
                    .is_some_and(|prefix| prefix.eq_ignore_ascii_case(unit))
                    && rest[unit.len()..].starts_with(' ');
                if matches {
                    return ParsedIngredient {
                        amount: parse_number(amount_str),
                        unit: normalize_merge_unit(unit),
                        name: rest[unit.len()..].trim().to_string(),
                        raw: raw.to_string(),
                    };
                }
            }
        }

        if let Some(amount) = parse_number(amount_str) {
            let after = rest.trim_start();
            let word_len = after
                .bytes()
                .take_while(|b| b.is_ascii_alphabetic())
                .count();
            let (word, tail) = after.split_at(word_len);
            let tail = tail.trim_start();

            let lower = word.to_lowercase();
            if !word.is_empty() && !tail.is_empty() && is_known_unit(&lower) {
                return ParsedIngredient {
                    amount: Some(amount),
                    unit: normalize_merge_unit(&lower),
                    name: tail.to_string(),
                    raw: raw.to_string(),
                };
            }

            // Not a unit: the word belongs to the name
            return ParsedIngredient {
                amount: Some(amount),
                unit: String::new(),
                name: after.trim().to_string(),
                raw: raw.to_string(),
            };
        }
    }

    // No amount found - the whole string is the name
    ParsedIngredient {
        amount: None,
        unit: String::new(),
        name: raw.to_string(),
        raw: raw.to_string(),
    }
}

/// Singular form of a common ingredient plural.
fn singularize(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == lower) {
        return (*singular).to_string();
    }

    if lower.ends_with("ies") && lower.len() > 4 {
        return format!("{}y", &lower[..lower.len() - 3]);
    }
    if lower.ends_with("ves") && lower.len() > 4 {
        // chives -> chive; irregular -ves plurals are handled above
        return lower[..lower.len() - 1].to_string();
    }
    if lower.ends_with("es") && lower.len() > 3 {
        let stem = &lower[..lower.len() - 2];
        if stem.ends_with("sh")
            || stem.ends_with("ch")
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with('s')
        {
            return stem.to_string();
        }
    }
    if lower.ends_with('s') && lower.len() > 2 && !lower.ends_with("ss") {
        return lower[..lower.len() - 1].to_string();
    }
    lower
}

/// Normalize an ingredient name for comparison: lowercase, strip
/// parentheticals and anything after a comma, drop identity-neutral
/// adjectives, collapse whitespace, singularize each word.
pub fn normalize_ingredient_name(name: &str) -> String {
    let mut normalized = name.to_lowercase();

    while let Some(start) = normalized.find('(') {
        match normalized[start..].find(')') {
            Some(end) => normalized.replace_range(start..start + end + 1, ""),
            None => {
                normalized.truncate(start);
                break;
            }
        }
    }

    if let Some(comma) = normalized.find(',') {
        normalized.truncate(comma);
    }

    normalized
        .split_whitespace()
        .filter(|word| !IGNORED_ADJECTIVES.contains(word))
        .map(singularize)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Format a numeric amount for display, snapping near-fraction decimals
/// back to fractions.
pub fn format_amount(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return String::new();
    };

    const FRACTIONS: &[(f64, &str)] = &[
        (0.25, "1/4"),
        (0.333, "1/3"),
        (0.5, "1/2"),
        (0.666, "2/3"),
        (0.75, "3/4"),
    ];

    let whole = amount.floor();
    let decimal = amount - whole;
    let fraction = FRACTIONS
        .iter()
        .find(|(value, _)| (decimal - value).abs() < 0.01)
        .map(|(_, text)| *text);

    match fraction {
        Some(text) if whole == 0.0 => text.to_string(),
        Some(text) => format!("{} {}", whole as i64, text),
        None if amount == amount.trunc() => format!("{}", amount as i64),
        None => {
            let text = format!("{amount:.2}");
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

/// Merge duplicate ingredients across recipes.
///
/// Items group by (normalized name, normalized unit); amounts sum when every
/// contributor has one, and each entry records the unique recipes it came
/// from. Output is sorted by display name.
pub fn merge_ingredients(items: &[ShoppingListItem]) -> Vec<MergedIngredient> {
    let mut merged: HashMap<String, MergedIngredient> = HashMap::new();

    for item in items {
        let source = if item.raw.trim().is_empty() {
            format!("{} {} {}", item.amount, item.unit, item.ingredient)
                .trim()
                .to_string()
        } else {
            item.raw.clone()
        };
        let parsed = parse_ingredient(&source);

        let display_name = if parsed.name.is_empty() {
            item.ingredient.clone()
        } else {
            parsed.name.clone()
        };
        let normalized_name = normalize_ingredient_name(&display_name);
        let normalized_unit = normalize_merge_unit(if parsed.unit.is_empty() {
            &item.unit
        } else {
            &parsed.unit
        });

        let key = format!("{normalized_name}|{normalized_unit}");
        match merged.get_mut(&key) {
            Some(existing) => {
                match (existing.amount, parsed.amount) {
                    (Some(current), Some(addition)) => existing.amount = Some(current + addition),
                    (None, Some(addition)) => existing.amount = Some(addition),
                    _ => {}
                }
                if !existing.source_recipes.contains(&item.recipe_slug) {
                    existing.source_recipes.push(item.recipe_slug.clone());
                }
            }
            None => {
                merged.insert(
                    key,
                    MergedIngredient {
                        amount: parsed.amount,
                        unit: normalized_unit,
                        name: display_name,
                        source_recipes: vec![item.recipe_slug.clone()],
                    },
                );
            }
        }
    }

    let mut result: Vec<MergedIngredient> = merged.into_values().collect();
    result.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.unit.cmp(&b.unit)));
    result
}

/// Format a merged ingredient for display (e.g. "3 tbsp olive oil").
pub fn format_merged_ingredient(ingredient: &MergedIngredient) -> String {
    let mut parts: Vec<String> = Vec::new();
    let amount = format_amount(ingredient.amount);
    if !amount.is_empty() {
        parts.push(amount);
    }
    if !ingredient.unit.is_empty() {
        parts.push(ingredient.unit.clone());
    }
    parts.push(ingredient.name.clone());
    parts.join(" ")
}
