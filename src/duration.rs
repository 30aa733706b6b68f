//! Duration parsing for schema.org time fields.

/// Parse a recipe duration into whole minutes.
///
/// Accepts either a bare digit string (taken directly as minutes) or the
/// restricted ISO 8601 form `PT[nH][nM][nS]`, case-insensitive, each
/// component optional. Seconds are rounded to the nearest minute. Empty,
/// unparseable, or non-positive input yields `None`.
pub fn parse_duration(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.bytes().all(|b| b.is_ascii_digit()) {
        let minutes: u32 = text.parse().ok()?;
        return (minutes > 0).then_some(minutes);
    }

    if !text
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("pt"))
    {
        return None;
    }

    let mut hours = 0.0;
    let mut minutes = 0.0;
    let mut seconds = 0.0;
    let mut number = String::new();
    for c in text[2..].chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            continue;
        }
        let value: f64 = number.parse().ok()?;
        number.clear();
        match c.to_ascii_uppercase() {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => return None,
        }
    }
    if !number.is_empty() {
        // trailing digits without a component marker
        return None;
    }

    let total = (hours * 60.0 + minutes + (seconds / 60.0).round()).round() as i64;
    u32::try_from(total).ok().filter(|&m| m > 0)
}
