use crate::extractors::Extractor;
use crate::model::Recipe;
use crate::normalize::{parse_instructions, strip_html};
use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;

pub struct JsonLdExtractor;

/// Clean common defects in embedded JSON before parsing: leading garbage
/// before the first brace, trailing commas, stray HTML comments.
fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = json_str.trim().to_string();

    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    cleaned = cleaned.replace(",]", "]").replace(",}", "}");
    cleaned = cleaned.replace("<!--", "").replace("-->", "");

    cleaned
}

/// The `@type` tag may be a single string or a list of strings.
fn is_recipe_type(node: &Value) -> bool {
    match node.get("@type") {
        Some(Value::String(tag)) => tag == "Recipe",
        Some(Value::Array(tags)) => tags.iter().any(|tag| tag.as_str() == Some("Recipe")),
        _ => false,
    }
}

/// Walk the candidate list in document order for the first Recipe-typed node,
/// searching each candidate's `@graph` container before moving on.
fn find_recipe(candidates: &[Value]) -> Option<&Value> {
    for candidate in candidates {
        if is_recipe_type(candidate) {
            return Some(candidate);
        }
        if let Some(graph) = candidate.get("@graph").and_then(Value::as_array) {
            if let Some(found) = graph.iter().find(|node| is_recipe_type(node)) {
                return Some(found);
            }
        }
    }
    None
}

/// Collapse a scalar or list-of-values down to one string. Numbers are
/// accepted because sites routinely write `"recipeYield": 4`.
fn read_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => items.first().and_then(read_scalar),
        _ => None,
    }
}

/// The `image` field appears as a bare URL, an ImageObject with a `url`
/// sub-field, or a list of either.
fn read_image(value: &Value) -> Option<String> {
    match value {
        Value::String(url) => Some(url.clone()),
        Value::Object(obj) => obj.get("url").and_then(Value::as_str).map(str::to_string),
        Value::Array(items) => items.first().and_then(read_image),
        _ => None,
    }
}

impl Extractor for JsonLdExtractor {
    fn extract(&self, document: &Html) -> Option<Recipe> {
        let selector = Selector::parse("script[type='application/ld+json']").ok()?;

        let mut candidates = Vec::new();
        for script in document.select(&selector) {
            // Scripts are raw-text nodes; .text() keeps the JSON unescaped,
            // where inner_html() would re-serialize `<` as `&lt;`.
            let raw = script.text().collect::<String>();
            let cleaned = sanitize_json(&raw);
            match serde_json::from_str::<Value>(&cleaned) {
                Ok(Value::Array(items)) => candidates.extend(items),
                Ok(value) => candidates.push(value),
                // Malformed blocks are routine in the wild; try the next one.
                Err(err) => debug!("Skipping unparseable ld+json block: {}", err),
            }
        }

        let recipe = find_recipe(&candidates)?;
        debug!("Found Recipe node in linked data");

        let ingredients: Vec<String> = recipe
            .get("recipeIngredient")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(strip_html)
                    .filter(|text| !text.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let instructions: Vec<String> = recipe
            .get("recipeInstructions")
            .map(parse_instructions)
            .unwrap_or_default()
            .iter()
            .map(|step| strip_html(step))
            .filter(|text| !text.is_empty())
            .collect();

        Some(Recipe {
            title: recipe
                .get("name")
                .and_then(Value::as_str)
                .map(strip_html)
                .unwrap_or_default(),
            image: recipe.get("image").and_then(read_image),
            servings_yield: recipe.get("recipeYield").and_then(read_scalar),
            total_time: recipe
                .get("totalTime")
                .and_then(Value::as_str)
                .map(str::to_string),
            ingredients,
            instructions,
            source: String::new(),
        })
    }
}
