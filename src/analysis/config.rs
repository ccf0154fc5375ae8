use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-1106";

/// Models that accept `response_format: {"type": "json_object"}`.
const JSON_FORMAT_MODELS: &[&str] = &[
	"gpt-4-1106-preview",
	"gpt-4-0125-preview",
	"gpt-4-turbo-preview",
	"gpt-3.5-turbo-1106",
	"gpt-3.5-turbo-0125",
];

pub const SYSTEM_PROMPT: &str = "You are an expert in semantic analysis and in the 01234 model of \
	levels of reality. You extract the meaningful concepts of a text, place each on one of five \
	levels of abstraction, and name the relationships between them. Only use concepts that appear \
	explicitly in the text.";

pub const ANALYSIS_PROMPT: &str = r#"Identify the 5-7 key concepts of the text below and categorize each into one level:
0 Potentiality, 1 Unity, 2 Duality, 3 Connection, 4 Manifestation.
Use specific verbs for relationships ("complements", "emerges from", "transforms").
Respond with JSON only:
{"concepts": [{"id": "concept-1", "name": "...", "level": 0, "levelName": "...",
"description": "...", "reasoning": "...", "x": 100, "y": 100,
"connections": [{"targetId": "concept-2", "relationship": "..."}],
"relatedConcepts": [{"id": "concept-2", "name": "...", "relationship": "..."}]}]}
Place concepts with x in 100-700 and y in 100-500.

Text to analyze:
"#;

/// Construction-time settings for [`super::AnalysisClient`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
	pub endpoint: String,
	pub model: String,
	pub temperature: f32,
	pub max_tokens: u32,
	pub system_prompt: String,
	pub analysis_prompt: String,
}

impl Default for AnalysisConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.into(),
			model: DEFAULT_MODEL.into(),
			temperature: 0.7,
			max_tokens: 2000,
			system_prompt: SYSTEM_PROMPT.into(),
			analysis_prompt: ANALYSIS_PROMPT.into(),
		}
	}
}

impl AnalysisConfig {
	pub fn supports_json_format(&self) -> bool {
		JSON_FORMAT_MODELS.contains(&self.model.as_str())
	}
}

/// Key baked in at build time via `CONCEPT_CANVAS_API_KEY`, if any.
pub fn build_time_api_key() -> Option<&'static str> {
	option_env!("CONCEPT_CANVAS_API_KEY").filter(|k| !k.trim().is_empty())
}
