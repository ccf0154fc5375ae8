//! Error types for the analysis client and canvas plumbing.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the text-analysis round trip.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
	/// No usable API key was configured.
	#[error("no API key configured")]
	MissingApiKey,
	/// The request could not be built, sent or read.
	#[error("request failed: {0}")]
	Request(String),
	/// The endpoint answered with a non-success status.
	#[error("analysis endpoint returned {status}: {body}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Response body, as text.
		body: String,
	},
	/// The completion carried no message content.
	#[error("no content in model response")]
	EmptyResponse,
	/// The message content is not a concept payload.
	#[error("failed to parse the analysis results: {0}")]
	MalformedPayload(String),
}

impl From<gloo_net::Error> for AnalysisError {
	fn from(e: gloo_net::Error) -> Self {
		Self::Request(e.to_string())
	}
}

/// Failures talking to the drawing surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
	/// `getContext("2d")` returned nothing usable.
	#[error("2d context unavailable")]
	ContextUnavailable,
	/// A web-sys call threw.
	#[error("canvas call failed: {0}")]
	Js(String),
}

impl From<JsValue> for CanvasError {
	fn from(v: JsValue) -> Self {
		Self::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
	}
}
