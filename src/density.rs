//! Ingredient density table.
//!
//! Grams per cup for common ingredients, used to turn volume measurements
//! into weights. Loaded once, read-only for the process lifetime.

use std::collections::HashMap;
use std::sync::LazyLock;

static INGREDIENT_DENSITY: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        // Flours
        ("flour", 120.0),
        ("all-purpose flour", 120.0),
        ("ap flour", 120.0),
        ("plain flour", 120.0),
        ("bread flour", 127.0),
        ("whole wheat flour", 113.0),
        ("whole-wheat flour", 113.0),
        ("cake flour", 114.0),
        ("almond flour", 96.0),
        ("almond meal", 96.0),
        ("coconut flour", 112.0),
        ("rice flour", 158.0),
        // Sugars
        ("sugar", 200.0),
        ("granulated sugar", 200.0),
        ("white sugar", 200.0),
        ("caster sugar", 200.0),
        ("brown sugar", 220.0),
        ("light brown sugar", 220.0),
        ("dark brown sugar", 220.0),
        ("packed brown sugar", 220.0),
        ("powdered sugar", 120.0),
        ("confectioners' sugar", 120.0),
        ("confectioners sugar", 120.0),
        ("icing sugar", 120.0),
        // Fats
        ("butter", 227.0),
        ("unsalted butter", 227.0),
        ("salted butter", 227.0),
        ("oil", 218.0),
        ("vegetable oil", 218.0),
        ("olive oil", 218.0),
        ("canola oil", 218.0),
        ("coconut oil", 218.0),
        ("shortening", 191.0),
        // Liquids
        ("water", 240.0),
        ("milk", 245.0),
        ("whole milk", 245.0),
        ("cream", 240.0),
        ("heavy cream", 240.0),
        ("whipping cream", 240.0),
        ("buttermilk", 245.0),
        ("yogurt", 245.0),
        ("greek yogurt", 280.0),
        ("sour cream", 240.0),
        ("honey", 340.0),
        ("maple syrup", 322.0),
        ("molasses", 340.0),
        ("corn syrup", 328.0),
        // Grains
        ("rice", 185.0),
        ("white rice", 185.0),
        ("brown rice", 190.0),
        ("oats", 90.0),
        ("rolled oats", 90.0),
        ("old-fashioned oats", 90.0),
        ("quick oats", 80.0),
        ("breadcrumbs", 108.0),
        ("panko breadcrumbs", 60.0),
        ("quinoa", 170.0),
        ("couscous", 175.0),
        // Nuts & Seeds
        ("almonds", 143.0),
        ("sliced almonds", 92.0),
        ("walnuts", 120.0),
        ("chopped walnuts", 120.0),
        ("pecans", 109.0),
        ("chopped pecans", 109.0),
        ("peanuts", 146.0),
        ("cashews", 137.0),
        ("pine nuts", 135.0),
        // Dairy
        ("parmesan", 100.0),
        ("grated parmesan", 100.0),
        ("cheddar", 113.0),
        ("shredded cheddar", 113.0),
        ("cream cheese", 232.0),
        ("cottage cheese", 225.0),
        ("ricotta cheese", 246.0),
        // Chocolate & Cocoa
        ("cocoa powder", 85.0),
        ("unsweetened cocoa", 85.0),
        ("chocolate chips", 170.0),
        // Starches & Leaveners
        ("cornstarch", 128.0),
        ("corn starch", 128.0),
        ("baking powder", 230.0),
        ("baking soda", 220.0),
        ("salt", 288.0),
        ("kosher salt", 240.0),
        ("table salt", 288.0),
        ("yeast", 192.0),
        ("active dry yeast", 192.0),
        ("instant yeast", 192.0),
        // Misc
        ("peanut butter", 258.0),
        ("mayonnaise", 220.0),
        ("ketchup", 240.0),
        ("soy sauce", 255.0),
    ])
});

/// Table keys longest-first, for the substring pass.
static KEYS_BY_LENGTH: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut keys: Vec<&'static str> = INGREDIENT_DENSITY.keys().copied().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    keys
});

/// True when `needle` occurs in `haystack` bounded by non-alphanumeric
/// characters on both sides.
fn contains_word(haystack: &str, needle: &str) -> bool {
    for (start, _) in haystack.match_indices(needle) {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[start + needle.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

/// Look up the density (grams per cup) for an ingredient name.
///
/// Tries an exact match on the whole name, then the longest table key that
/// appears in the name at word boundaries, then the name's first word alone.
pub fn find_ingredient_density(name: &str) -> Option<f64> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    if let Some(&density) = INGREDIENT_DENSITY.get(name.as_str()) {
        return Some(density);
    }

    for key in KEYS_BY_LENGTH.iter() {
        if contains_word(&name, key) {
            return INGREDIENT_DENSITY.get(key).copied();
        }
    }

    let first_word = name
        .split_whitespace()
        .next()?
        .trim_matches(|c: char| !c.is_alphanumeric());
    INGREDIENT_DENSITY.get(first_word).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(find_ingredient_density("flour"), Some(120.0));
        assert_eq!(find_ingredient_density("Olive Oil"), Some(218.0));
    }

    #[test]
    fn test_longest_key_wins() {
        // "brown sugar" must beat the plain "sugar" entry
        assert_eq!(find_ingredient_density("packed brown sugar"), Some(220.0));
        assert_eq!(find_ingredient_density("dark brown sugar, sifted"), Some(220.0));
    }

    #[test]
    fn test_substring_respects_word_boundaries() {
        // "buttermilk" must not match "butter" or "milk" mid-word
        assert_eq!(find_ingredient_density("buttermilk"), Some(245.0));
        assert_eq!(find_ingredient_density("buttermilk, shaken"), Some(245.0));
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(find_ingredient_density("sifted flour for dusting"), Some(120.0));
        assert_eq!(find_ingredient_density("melted unsalted butter"), Some(227.0));
    }

    #[test]
    fn test_trailing_qualifiers() {
        assert_eq!(find_ingredient_density("flour, plus extra"), Some(120.0));
        assert_eq!(find_ingredient_density("oil for frying"), Some(218.0));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(find_ingredient_density("saffron threads"), None);
        assert_eq!(find_ingredient_density(""), None);
    }
}
