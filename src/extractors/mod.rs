use crate::model::ScrapedRecipe;
use scraper::Html;

mod json_ld;

pub use self::json_ld::JsonLdExtractor;

pub trait Extractor {
    /// Extract a recipe from the document. `None` means no recipe was
    /// present, which is an expected outcome rather than an error.
    fn parse(&self, document: &Html) -> Option<ScrapedRecipe>;
}
