//! Shared field normalizers applied to raw extractor output.

use html_escape::decode_html_entities;
use regex::Regex;
use scraper::Html;
use serde_json::Value;
use std::sync::LazyLock;

/// Restricted ISO-8601 duration of the form `PT<hours>H<minutes>M`,
/// either component optional.
static DURATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?").expect("Invalid duration regex"));

/// Strip inline markup and encoded entities from free text.
///
/// The text is rendered into a detached fragment and read back as text
/// content, so `<b>Mix</b> well` becomes `Mix well`.
pub fn strip_html(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    let text = fragment.root_element().text().collect::<String>();
    // for some reason need to decode twice to get the correct string
    decode_html_entities(&decode_html_entities(&text))
        .trim()
        .to_string()
}

/// Normalize a `recipeInstructions` value into a flat ordered step list.
///
/// Accepts a plain string (split on newlines), a list of strings, a list of
/// `HowToStep` objects, or `HowToSection` groups whose child steps are inlined
/// in order with the section's own label dropped. Elements of any other shape
/// are skipped, and empty strings never make it into the output.
pub fn parse_instructions(raw: &Value) -> Vec<String> {
    let steps = match raw {
        Value::String(text) => text.split('\n').map(|s| s.trim().to_string()).collect(),
        Value::Array(items) => {
            let mut steps = Vec::new();
            for item in items {
                collect_steps(item, &mut steps);
            }
            steps
        }
        _ => Vec::new(),
    };

    steps.into_iter().filter(|s| !s.is_empty()).collect()
}

fn collect_steps(item: &Value, steps: &mut Vec<String>) {
    match item {
        Value::String(text) => steps.push(text.trim().to_string()),
        Value::Object(obj) => match obj.get("@type").and_then(Value::as_str) {
            Some("HowToStep") => steps.push(step_text(item)),
            Some("HowToSection") => {
                let children = obj
                    .get("itemListElement")
                    .and_then(Value::as_array)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                for child in children {
                    match child {
                        Value::String(text) => steps.push(text.trim().to_string()),
                        _ => steps.push(step_text(child)),
                    }
                }
            }
            _ => {}
        },
        _ => {}
    }
}

fn step_text(step: &Value) -> String {
    step.get("text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Format a total-time duration for display.
///
/// `PT1H30M` becomes `1h 30m`; a string that doesn't match the pattern, or
/// one where both components are zero or absent, produces no display value.
pub fn format_total_time(iso: &str) -> Option<String> {
    let caps = DURATION_REGEX.captures(iso)?;
    let hours: u64 = caps
        .get(1)
        .map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let minutes: u64 = caps
        .get(2)
        .map_or(0, |m| m.as_str().parse().unwrap_or(0));

    match (hours, minutes) {
        (0, 0) => None,
        (h, 0) => Some(format!("{}h", h)),
        (0, m) => Some(format!("{}m", m)),
        (h, m) => Some(format!("{}h {}m", h, m)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_html_removes_tags_keeps_text() {
        assert_eq!(strip_html("<b>Mix</b> well"), "Mix well");
        assert_eq!(strip_html("  plain text  "), "plain text");
        assert_eq!(strip_html("salt &amp; pepper"), "salt & pepper");
    }

    #[test]
    fn test_strip_html_double_encoded_entities() {
        assert_eq!(strip_html("fish &amp;amp; chips"), "fish & chips");
    }

    #[test]
    fn test_instructions_from_string_split_on_newlines() {
        let raw = json!("Preheat oven.\n\nMix the batter.\nBake.");
        assert_eq!(
            parse_instructions(&raw),
            vec!["Preheat oven.", "Mix the batter.", "Bake."]
        );
    }

    #[test]
    fn test_instructions_from_step_objects() {
        let raw = json!([
            {"@type": "HowToStep", "text": " Cook pasta "},
            {"@type": "HowToStep", "text": "Fry bacon"}
        ]);
        assert_eq!(parse_instructions(&raw), vec!["Cook pasta", "Fry bacon"]);
    }

    #[test]
    fn test_sections_flatten_to_child_steps_without_label() {
        let raw = json!([
            {
                "@type": "HowToSection",
                "name": "For the sauce",
                "itemListElement": [
                    {"@type": "HowToStep", "text": "Melt butter"},
                    "Whisk in flour"
                ]
            },
            {"@type": "HowToStep", "text": "Serve"}
        ]);
        let steps = parse_instructions(&raw);
        assert_eq!(steps, vec!["Melt butter", "Whisk in flour", "Serve"]);
        assert!(!steps.iter().any(|s| s.contains("For the sauce")));
    }

    #[test]
    fn test_unknown_shapes_skipped_and_empties_dropped() {
        let raw = json!(["  ", 42, {"@type": "VideoObject"}, "Stir"]);
        assert_eq!(parse_instructions(&raw), vec!["Stir"]);
    }

    #[test]
    fn test_instructions_idempotent_on_flat_output() {
        let raw = json!([
            {"@type": "HowToSection", "itemListElement": [{"@type": "HowToStep", "text": "A"}]},
            "B",
            {"@type": "HowToStep", "text": "C"}
        ]);
        let once = parse_instructions(&raw);
        let twice = parse_instructions(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_format_total_time() {
        assert_eq!(format_total_time("PT1H30M").as_deref(), Some("1h 30m"));
        assert_eq!(format_total_time("PT45M").as_deref(), Some("45m"));
        assert_eq!(format_total_time("PT2H").as_deref(), Some("2h"));
        assert_eq!(format_total_time("PT0H0M"), None);
        assert_eq!(format_total_time("PT"), None);
        assert_eq!(format_total_time("90 minutes"), None);
    }
}
