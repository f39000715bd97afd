use crate::model::Recipe;
use scraper::Html;

mod json_ld;
mod microdata;

pub use self::json_ld::JsonLdExtractor;
pub use self::microdata::MicroDataExtractor;

/// A strategy for locating recipe data inside a parsed document.
///
/// Extractors never fail loudly: malformed third-party markup degrades to
/// `None` and the pipeline moves on to the next strategy.
pub trait Extractor {
    fn extract(&self, document: &Html) -> Option<Recipe>;
}
