use std::fmt;

use gloo_net::http::Request;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::config::AnalysisConfig;
use super::validate::parse_concepts;
use crate::components::concept_canvas::Concept;
use crate::error::AnalysisError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatMessage {
	pub role: &'static str,
	pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResponseFormat {
	#[serde(rename = "type")]
	pub kind: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
	pub model: String,
	pub temperature: f32,
	pub max_tokens: u32,
	pub messages: Vec<ChatMessage>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
	#[serde(default)]
	choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
	message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
	content: Option<String>,
}

/// Chat-completions client. Built explicitly and handed to whoever needs it.
#[derive(Clone)]
pub struct AnalysisClient {
	config: AnalysisConfig,
	api_key: String,
}

impl fmt::Debug for AnalysisClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AnalysisClient")
			.field("config", &self.config)
			.field("api_key", &"<redacted>")
			.finish()
	}
}

impl AnalysisClient {
	pub fn new(config: AnalysisConfig, api_key: impl Into<String>) -> Result<Self, AnalysisError> {
		let api_key = api_key.into().trim().to_owned();
		if api_key.is_empty() {
			return Err(AnalysisError::MissingApiKey);
		}
		Ok(Self { config, api_key })
	}

	pub fn config(&self) -> &AnalysisConfig {
		&self.config
	}

	pub fn build_request(&self, text: &str) -> ChatRequest {
		let response_format = if self.config.supports_json_format() {
			Some(ResponseFormat {
				kind: "json_object",
			})
		} else {
			debug!(
				"model {} does not support response_format, leaving it out",
				self.config.model
			);
			None
		};
		ChatRequest {
			model: self.config.model.clone(),
			temperature: self.config.temperature,
			max_tokens: self.config.max_tokens,
			messages: vec![
				ChatMessage {
					role: "system",
					content: self.config.system_prompt.clone(),
				},
				ChatMessage {
					role: "user",
					content: format!("{}{}", self.config.analysis_prompt, text),
				},
			],
			response_format,
		}
	}

	/// Sends `text` for categorization and validates the returned concepts.
	pub async fn analyze(&self, text: &str) -> Result<Vec<Concept>, AnalysisError> {
		let request = self.build_request(text);
		info!(
			"analyzing {} chars with {}",
			text.chars().count(),
			request.model
		);

		let response = Request::post(&self.config.endpoint)
			.header("Authorization", &format!("Bearer {}", self.api_key))
			.json(&request)?
			.send()
			.await?;
		if !response.ok() {
			let status = response.status();
			let body = response.text().await.unwrap_or_default();
			return Err(AnalysisError::Status { status, body });
		}

		let completion: ChatResponse = response.json().await?;
		let concepts = parse_concepts(&completion_content(completion)?)?;
		info!("analysis returned {} concepts", concepts.len());
		Ok(concepts)
	}
}

fn completion_content(response: ChatResponse) -> Result<String, AnalysisError> {
	response
		.choices
		.into_iter()
		.next()
		.and_then(|c| c.message.content)
		.filter(|c| !c.trim().is_empty())
		.ok_or(AnalysisError::EmptyResponse)
}
