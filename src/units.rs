//! Unit canonicalization.
//!
//! Maps the many spellings recipe sites use ("Tbsp", "fl. oz.", `"`) onto a
//! fixed set of canonical symbols, and classifies each symbol for the metric
//! converter. This lexicon is conversion-oriented; the shopping-list merge
//! engine keeps its own, display-oriented alias table (see `merge`).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Measurement system class of a canonical unit symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    ImperialVolume,
    ImperialWeight,
    ImperialLength,
    Metric,
    Unrecognized,
}

/// Alias spelling -> canonical symbol.
///
/// Single-letter aliases are case-sensitive on purpose: `T` is a tablespoon
/// while `t` is a teaspoon. Multi-letter aliases also carry a lowercase entry
/// so the case-insensitive fallback in [`normalize_unit`] finds them.
static UNIT_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Volume - tablespoon
        ("tablespoon", "tbsp"),
        ("tablespoons", "tbsp"),
        ("T", "tbsp"),
        ("Tbsp", "tbsp"),
        ("tbsp", "tbsp"),
        ("tbsp.", "tbsp"),
        ("tbl.", "tbsp"),
        ("tbl", "tbsp"),
        // Volume - teaspoon
        ("teaspoon", "tsp"),
        ("teaspoons", "tsp"),
        ("t", "tsp"),
        ("tsp", "tsp"),
        ("tsp.", "tsp"),
        // Volume - cup
        ("cup", "cup"),
        ("cups", "cup"),
        ("c", "cup"),
        ("C", "cup"),
        // Volume - fluid ounce
        ("fluid ounce", "fl oz"),
        ("fluid ounces", "fl oz"),
        ("fl. oz.", "fl oz"),
        ("fl oz", "fl oz"),
        ("fl. oz", "fl oz"),
        ("floz", "fl oz"),
        // Volume - pint
        ("pint", "pint"),
        ("pints", "pint"),
        ("pt", "pint"),
        ("pt.", "pint"),
        // Volume - quart
        ("quart", "quart"),
        ("quarts", "quart"),
        ("qt", "quart"),
        ("qt.", "quart"),
        // Volume - gallon
        ("gallon", "gallon"),
        ("gallons", "gallon"),
        ("gal", "gallon"),
        ("gal.", "gallon"),
        // Volume - liter
        ("liter", "L"),
        ("liters", "L"),
        ("litre", "L"),
        ("litres", "L"),
        ("l", "L"),
        ("l.", "L"),
        ("L", "L"),
        // Volume - milliliter
        ("milliliter", "ml"),
        ("milliliters", "ml"),
        ("millilitre", "ml"),
        ("millilitres", "ml"),
        ("ml", "ml"),
        ("mL", "ml"),
        ("ml.", "ml"),
        // Weight - ounce
        ("ounce", "oz"),
        ("ounces", "oz"),
        ("oz.", "oz"),
        ("oz", "oz"),
        // Weight - pound
        ("pound", "lb"),
        ("pounds", "lb"),
        ("lb.", "lb"),
        ("lbs", "lb"),
        ("lbs.", "lb"),
        ("lb", "lb"),
        // Weight - gram
        ("gram", "g"),
        ("grams", "g"),
        ("gr", "g"),
        ("g.", "g"),
        ("g", "g"),
        // Weight - kilogram
        ("kilogram", "kg"),
        ("kilograms", "kg"),
        ("kilo", "kg"),
        ("kilos", "kg"),
        ("kg", "kg"),
        ("kg.", "kg"),
        // Length (for "1 inch piece of ginger")
        ("inch", "inch"),
        ("inches", "inch"),
        ("in", "inch"),
        ("in.", "inch"),
        ("\"", "inch"),
        // Length - centimeter
        ("centimeter", "cm"),
        ("centimeters", "cm"),
        ("centimetre", "cm"),
        ("centimetres", "cm"),
        ("cm", "cm"),
        ("cm.", "cm"),
    ])
});

/// Alias spellings sorted longest-first so a short token never shadows a
/// longer one when scanning text (e.g. "fl oz" must match before "l").
pub(crate) static UNIT_TOKENS_SORTED: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut tokens: Vec<&'static str> = UNIT_ALIASES.keys().copied().collect();
    tokens.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    tokens
});

fn lookup(token: &str) -> Option<&'static str> {
    if let Some(&unit) = UNIT_ALIASES.get(token) {
        return Some(unit);
    }
    UNIT_ALIASES.get(token.to_lowercase().as_str()).copied()
}

/// Canonicalize a unit spelling.
///
/// Tries the trimmed token as-is (this is what keeps `T`/`t` and `c`/`C`
/// apart), then lowercased, then once more with a single trailing period
/// stripped. Unknown spellings return `None`.
pub fn normalize_unit(token: &str) -> Option<&'static str> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    lookup(token).or_else(|| token.strip_suffix('.').and_then(lookup))
}

/// Classify a canonical unit symbol.
pub fn classify(unit: &str) -> UnitClass {
    match unit {
        "tsp" | "tbsp" | "fl oz" | "cup" | "pint" | "quart" | "gallon" => UnitClass::ImperialVolume,
        "oz" | "lb" => UnitClass::ImperialWeight,
        "inch" => UnitClass::ImperialLength,
        "g" | "kg" | "ml" | "L" | "cm" => UnitClass::Metric,
        _ => UnitClass::Unrecognized,
    }
}
