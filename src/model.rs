use serde::{Deserialize, Serialize};

/// Confidence tier of a metric conversion. Communicates certainty, not a
/// numeric error bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// One ingredient line split into its quantity and name parts.
///
/// `converted == true` means `amount` holds metric text; `false` means it is
/// either empty (no quantity detected) or the original numeric text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIngredientLine {
    pub original: String,
    pub amount: String,
    pub name: String,
    pub converted: bool,
    pub confidence: Confidence,
}

/// Amount/name pair as consumed by the submission form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeIngredient {
    pub amount: String,
    pub name: String,
}

/// Recipe data extracted from a page, ready for form population.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedRecipe {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Prep time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    /// Cook time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    pub ingredients: Vec<RecipeIngredient>,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
