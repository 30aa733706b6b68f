//! Free-text quantity normalization.
//!
//! Rewrites spelled-out numbers and fractions into decimal text so the
//! ingredient line parser only ever sees digits. Runs as ordered passes:
//! word numbers, then glyph mixed numbers ("2½"), then text mixed numbers
//! ("2 1/2"), then any standalone fraction left over.

/// Written numbers, longest spelling first so a short word never matches
/// inside a longer one.
const WORD_NUMBERS: &[(&str, &str)] = &[
    ("twelve", "12"),
    ("eleven", "11"),
    ("three", "3"),
    ("seven", "7"),
    ("eight", "8"),
    ("four", "4"),
    ("five", "5"),
    ("nine", "9"),
    ("one", "1"),
    ("two", "2"),
    ("six", "6"),
    ("ten", "10"),
    ("an", "1"),
    ("a", "1"),
];

/// Unicode fraction glyphs. Thirds use the fixed two-decimal approximations;
/// downstream conversion and tests rely on these exact values.
const GLYPH_FRACTIONS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 0.33),
    ('⅔', 0.67),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Text fractions recognized as quantities. Anything outside this table
/// (e.g. "7/9") is left untouched.
const TEXT_FRACTIONS: &[(&str, f64)] = &[
    ("1/2", 0.5),
    ("1/3", 0.33),
    ("2/3", 0.67),
    ("1/4", 0.25),
    ("3/4", 0.75),
    ("1/8", 0.125),
    ("3/8", 0.375),
    ("5/8", 0.625),
    ("7/8", 0.875),
];

/// Rewrite spelled-out numbers and fractions in `text` to decimal digits.
pub fn normalize_values(text: &str) -> String {
    let pass = replace_word_numbers(text);
    let pass = collapse_glyph_mixed_numbers(&pass);
    let pass = collapse_text_mixed_numbers(&pass);
    replace_standalone_fractions(&pass)
}

fn format_decimal(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// True when `rest` begins with `word` (ASCII case-insensitive) followed by
/// whitespace or end of string.
fn starts_with_word(rest: &str, word: &str) -> bool {
    if rest.len() < word.len() || !rest.is_char_boundary(word.len()) {
        return false;
    }
    if !rest[..word.len()].eq_ignore_ascii_case(word) {
        return false;
    }
    let after = &rest[word.len()..];
    after.is_empty() || after.starts_with(char::is_whitespace)
}

fn replace_word_numbers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut at_word_start = true;
    while !rest.is_empty() {
        if at_word_start {
            if let Some((word, digits)) = WORD_NUMBERS
                .iter()
                .find(|(word, _)| starts_with_word(rest, word))
            {
                out.push_str(digits);
                rest = &rest[word.len()..];
                at_word_start = false;
                continue;
            }
        }
        let c = rest.chars().next().unwrap();
        at_word_start = c.is_whitespace();
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Read a run of ASCII digits from the front of `s`.
fn leading_digits(s: &str) -> Option<(u32, usize)> {
    let len = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    s[..len].parse().ok().map(|n| (n, len))
}

fn glyph_value(c: char) -> Option<f64> {
    GLYPH_FRACTIONS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, v)| *v)
}

/// Collapse "2½" / "2 ½" into "2.5".
fn collapse_glyph_mixed_numbers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut at_word_start = true;
    while !rest.is_empty() {
        if at_word_start {
            if let Some((whole, digits_len)) = leading_digits(rest) {
                let after = &rest[digits_len..];
                let after = after.strip_prefix(' ').unwrap_or(after);
                if let Some((glyph, frac)) = after
                    .chars()
                    .next()
                    .and_then(|c| glyph_value(c).map(|v| (c, v)))
                {
                    out.push_str(&format_decimal(f64::from(whole) + frac));
                    rest = &after[glyph.len_utf8()..];
                    at_word_start = false;
                    continue;
                }
            }
        }
        let c = rest.chars().next().unwrap();
        at_word_start = c.is_whitespace();
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Match a text fraction from the fixed table at the front of `s`, requiring
/// a word boundary after it.
fn leading_text_fraction(s: &str) -> Option<(f64, usize)> {
    for (token, value) in TEXT_FRACTIONS {
        if s.starts_with(token) {
            let after = &s[token.len()..];
            if after.is_empty() || !after.starts_with(|c: char| c.is_ascii_alphanumeric()) {
                return Some((*value, token.len()));
            }
        }
    }
    None
}

/// Collapse "2 1/2" into "2.5".
fn collapse_text_mixed_numbers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut at_word_start = true;
    while !rest.is_empty() {
        if at_word_start {
            if let Some((whole, digits_len)) = leading_digits(rest) {
                let after = &rest[digits_len..];
                let spaces = after.len() - after.trim_start_matches(' ').len();
                if spaces > 0 {
                    if let Some((frac, frac_len)) = leading_text_fraction(&after[spaces..]) {
                        out.push_str(&format_decimal(f64::from(whole) + frac));
                        rest = &after[spaces + frac_len..];
                        at_word_start = false;
                        continue;
                    }
                }
            }
        }
        let c = rest.chars().next().unwrap();
        at_word_start = c.is_whitespace();
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Replace remaining standalone fractions, text forms before glyphs.
fn replace_standalone_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut at_word_start = true;
    while !rest.is_empty() {
        if at_word_start {
            if let Some((frac, len)) = leading_text_fraction(rest) {
                out.push_str(&format_decimal(frac));
                rest = &rest[len..];
                at_word_start = false;
                continue;
            }
        }
        let c = rest.chars().next().unwrap();
        if let Some(frac) = glyph_value(c) {
            out.push_str(&format_decimal(frac));
            rest = &rest[c.len_utf8()..];
            at_word_start = false;
            continue;
        }
        at_word_start = c.is_whitespace();
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}
