pub mod config;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod model;
pub mod normalize;

use log::debug;
use scraper::Html;

use crate::extractors::{Extractor, JsonLdExtractor, MicroDataExtractor};

pub use crate::error::Error;
pub use crate::model::Recipe;

/// Extract a normalized recipe from raw HTML.
///
/// The linked-data extractor runs first, then microdata; the first strategy
/// returning a candidate wins. A candidate with neither ingredients nor
/// instructions is not a usable result and counts as not found. The parse is
/// best-effort, so malformed HTML never fails here.
pub fn extract_recipe(html: &str, source_url: &str) -> Result<Recipe, Error> {
    let document = Html::parse_document(html);

    let extractors: Vec<Box<dyn Extractor>> =
        vec![Box::new(JsonLdExtractor), Box::new(MicroDataExtractor)];

    let mut recipe = extractors
        .iter()
        .find_map(|extractor| extractor.extract(&document))
        .ok_or(Error::NotFound)?;

    if recipe.ingredients.is_empty() && recipe.instructions.is_empty() {
        return Err(Error::NotFound);
    }

    recipe.source = source_url.to_string();
    debug!("Extracted recipe: {:#?}", recipe);
    Ok(recipe)
}

/// Fetch a URL and extract the recipe its page embeds.
pub fn import_recipe(url: &str) -> Result<Recipe, Error> {
    let body = fetcher::fetch_page(url)?;
    extract_recipe(&body, url)
}
