use crate::extractors::Extractor;
use crate::model::Recipe;
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Reads schema.org Recipe microdata straight off the element tree. Used only
/// when the linked-data extractor found nothing; durations are not parsed on
/// this path, so `total_time` stays absent.
pub struct MicroDataExtractor;

fn element_text(el: ElementRef) -> String {
    // Text nodes concatenate directly; inline markup must not introduce
    // doubled spaces, so collapse whitespace runs afterwards.
    let text = el.text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_prop_text(root: ElementRef, prop: &str) -> Option<String> {
    let selector = Selector::parse(&format!("[itemprop='{}']", prop)).ok()?;
    root.select(&selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

fn prop_text_list(root: ElementRef, selector_str: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector_str) else {
        return Vec::new();
    };
    root.select(&selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

impl Extractor for MicroDataExtractor {
    fn extract(&self, document: &Html) -> Option<Recipe> {
        let container_selector = Selector::parse("[itemtype*='schema.org/Recipe']").ok()?;

        // Every property lookup is scoped to the Recipe item; global itemprop
        // searches pick up unrelated page content (site title, author bio).
        let container = document.select(&container_selector).next()?;
        debug!("Found microdata Recipe container");

        // Both property spellings are seen in the wild.
        let ingredients = prop_text_list(
            container,
            "[itemprop='recipeIngredient'], [itemprop='ingredients']",
        );
        let instructions = prop_text_list(container, "[itemprop='recipeInstructions']");

        // Without usable content there is no other signal this was a real
        // recipe, so bail out here rather than in the pipeline.
        if ingredients.is_empty() && instructions.is_empty() {
            return None;
        }

        let image = Selector::parse("[itemprop='image']")
            .ok()
            .and_then(|sel| container.select(&sel).next())
            .and_then(|el| el.value().attr("src"))
            .map(str::to_string);

        Some(Recipe {
            title: first_prop_text(container, "name").unwrap_or_default(),
            image,
            servings_yield: first_prop_text(container, "recipeYield"),
            total_time: None,
            ingredients,
            instructions,
            source: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_recipe_container() {
        let document = Html::parse_document(
            r#"<html><body><div itemscope itemtype="http://schema.org/Person">
            <span itemprop="name">Just an author</span></div></body></html>"#,
        );
        assert!(MicroDataExtractor.extract(&document).is_none());
    }

    #[test]
    fn test_container_without_content_is_no_candidate() {
        let document = Html::parse_document(
            r#"<html><body><div itemscope itemtype="http://schema.org/Recipe">
            <h1 itemprop="name">Title only</h1></div></body></html>"#,
        );
        assert!(MicroDataExtractor.extract(&document).is_none());
    }

    #[test]
    fn test_inline_markup_does_not_double_spaces() {
        let document = Html::parse_document(
            r#"<html><body><div itemscope itemtype="http://schema.org/Recipe">
            <div itemprop="name">Banana <em>Bread</em></div>
            <li itemprop="recipeIngredient">5 <b>Tbsp</b> butter</li>
            </div></body></html>"#,
        );
        let recipe = MicroDataExtractor.extract(&document).unwrap();
        assert_eq!(recipe.title, "Banana Bread");
        assert_eq!(recipe.ingredients, vec!["5 Tbsp butter"]);
    }

    #[test]
    fn test_image_without_src_attribute_is_absent() {
        let document = Html::parse_document(
            r#"<html><body><div itemscope itemtype="http://schema.org/Recipe">
            <div itemprop="image">not an img tag</div>
            <li itemprop="recipeIngredient">flour</li>
            </div></body></html>"#,
        );
        let recipe = MicroDataExtractor.extract(&document).unwrap();
        assert_eq!(recipe.image, None);
        assert_eq!(recipe.ingredients, vec!["flour"]);
    }
}
