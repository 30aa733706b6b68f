//! Imperial-to-metric conversion.
//!
//! Weights and lengths convert with fixed factors. Volumes consult the
//! ingredient density table to produce a weight; when no density is known
//! the result stays in milliliters with a confidence that reflects how
//! trustworthy the ml figure is for that unit size.

use crate::density::find_ingredient_density;
use crate::model::Confidence;
use crate::units::{classify, UnitClass};

/// Separator style of a quantity range, preserved through conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStyle {
    /// "1-2"
    Dash,
    /// "1 to 2"
    To,
}

/// A parsed numeric quantity, either a single value or a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Single(f64),
    Range {
        low: f64,
        high: f64,
        style: RangeStyle,
    },
}

fn volume_to_ml(unit: &str) -> Option<f64> {
    Some(match unit {
        "tsp" => 5.0,
        "tbsp" => 15.0,
        "fl oz" => 30.0,
        "cup" => 240.0,
        "pint" => 473.0,
        "quart" => 946.0,
        "gallon" => 3785.0,
        _ => return None,
    })
}

fn weight_to_g(unit: &str) -> Option<f64> {
    Some(match unit {
        "oz" => 28.0,
        "lb" => 454.0,
        _ => return None,
    })
}

const INCH_TO_CM: f64 = 2.5;

/// Round a metric value for display: nearest integer at 10 and above, one
/// decimal below that, with a trailing ".0" trimmed.
fn format_metric_amount(value: f64) -> String {
    if value >= 10.0 {
        format!("{}", value.round() as i64)
    } else {
        let rounded = (value * 10.0).round() / 10.0;
        if rounded == rounded.trunc() {
            format!("{}", rounded as i64)
        } else {
            format!("{rounded:.1}")
        }
    }
}

/// Apply `factor` to every endpoint and append the metric suffix, keeping
/// the original separator style for ranges.
fn render(quantity: Quantity, factor: f64, suffix: &str) -> String {
    match quantity {
        Quantity::Single(value) => format!("{}{}", format_metric_amount(value * factor), suffix),
        Quantity::Range { low, high, style } => {
            let separator = match style {
                RangeStyle::Dash => "-",
                RangeStyle::To => " to ",
            };
            format!(
                "{}{}{}{}",
                format_metric_amount(low * factor),
                separator,
                format_metric_amount(high * factor),
                suffix
            )
        }
    }
}

/// Convert an amount in a canonical unit to metric text plus a confidence
/// tier. Unrecognized units pass through unchanged at low confidence; there
/// is no failure state.
pub fn convert_to_metric(quantity: Quantity, unit: &str, ingredient: &str) -> (String, Confidence) {
    match classify(unit) {
        UnitClass::ImperialWeight => {
            // factors are always present for this class
            let factor = weight_to_g(unit).unwrap_or_default();
            (render(quantity, factor, "g"), Confidence::High)
        }
        UnitClass::ImperialLength => (render(quantity, INCH_TO_CM, "cm"), Confidence::High),
        UnitClass::ImperialVolume => {
            let ml_per_unit = volume_to_ml(unit).unwrap_or_default();
            let density = find_ingredient_density(ingredient);
            match quantity {
                Quantity::Single(_) => match density {
                    Some(grams_per_cup) => {
                        let factor = ml_per_unit / 240.0 * grams_per_cup;
                        (render(quantity, factor, "g"), Confidence::High)
                    }
                    None => {
                        let confidence = if matches!(unit, "tsp" | "tbsp") {
                            Confidence::High
                        } else {
                            Confidence::Medium
                        };
                        (render(quantity, ml_per_unit, "ml"), confidence)
                    }
                },
                Quantity::Range { .. } => {
                    // Ranges stay in ml; density only informs the tier.
                    let confidence =
                        if density.is_some() || matches!(unit, "tsp" | "tbsp") {
                            Confidence::High
                        } else {
                            Confidence::Medium
                        };
                    (render(quantity, ml_per_unit, "ml"), confidence)
                }
            }
        }
        UnitClass::Metric | UnitClass::Unrecognized => {
            let amount = match quantity {
                Quantity::Single(value) => format_metric_amount(value),
                Quantity::Range { .. } => render(quantity, 1.0, ""),
            };
            (format!("{amount}{unit}"), Confidence::Low)
        }
    }
}
