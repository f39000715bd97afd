use serde::{Deserialize, Serialize};

/// One normalized recipe record, the engine's sole output type.
///
/// All free-text fields are HTML-stripped before they land here, so markup
/// embedded in third-party data never leaks into output. `source` is attached
/// by the pipeline, not by the extractors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "yield", skip_serializing_if = "Option::is_none")]
    pub servings_yield: Option<String>,
    /// ISO-8601-style duration (e.g. `PT1H30M`), passed through verbatim.
    /// Formatting for display is a presentation concern of the consumer.
    #[serde(rename = "totalTime", skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub source: String,
}
