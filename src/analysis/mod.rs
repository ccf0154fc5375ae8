//! The text-analysis collaborator: request building, transport and
//! validation of the returned concept payload.

mod client;
pub mod config;
pub mod validate;

pub use client::{AnalysisClient, ChatMessage, ChatRequest, ResponseFormat};
pub use config::AnalysisConfig;
pub use validate::parse_concepts;
