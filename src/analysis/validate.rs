//! Boundary validation of the model's JSON payload.
//!
//! The completion text is untrusted: it is parsed as loose JSON and every
//! entry is checked field by field before it becomes a [`Concept`]. Bad
//! entries are dropped with a warning rather than failing the whole result.

use std::collections::HashSet;

use log::warn;
use serde_json::{Map, Value};

use crate::components::concept_canvas::types::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::components::concept_canvas::{Concept, Connection, Level, RelatedConcept};
use crate::error::AnalysisError;

/// Parses `{"concepts": [...]}` or a bare array into validated concepts.
/// A payload object without `concepts` yields an empty list.
pub fn parse_concepts(content: &str) -> Result<Vec<Concept>, AnalysisError> {
	let value: Value = serde_json::from_str(strip_code_fence(content))
		.map_err(|e| AnalysisError::MalformedPayload(e.to_string()))?;
	let entries = match value {
		Value::Array(entries) => entries,
		Value::Object(mut map) => match map.remove("concepts") {
			Some(Value::Array(entries)) => entries,
			Some(Value::Null) | None => Vec::new(),
			Some(other) => {
				return Err(AnalysisError::MalformedPayload(format!(
					"`concepts` is not an array: {other}"
				)));
			}
		},
		other => {
			return Err(AnalysisError::MalformedPayload(format!(
				"expected an object or array, got {other}"
			)));
		}
	};

	let mut seen = HashSet::new();
	let mut concepts = Vec::with_capacity(entries.len());
	for (i, entry) in entries.iter().enumerate() {
		let Some(concept) = concept_from(entry) else {
			warn!("dropping malformed concept entry #{i}");
			continue;
		};
		if !seen.insert(concept.id.clone()) {
			warn!("dropping duplicate concept id {:?}", concept.id);
			continue;
		}
		concepts.push(concept);
	}
	Ok(concepts)
}

fn strip_code_fence(content: &str) -> &str {
	let trimmed = content.trim();
	let Some(rest) = trimmed.strip_prefix("```") else {
		return trimmed;
	};
	// drop the info string ("json") on the opening fence line
	let body = rest.split_once('\n').map_or("", |(_, body)| body);
	body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn concept_from(entry: &Value) -> Option<Concept> {
	let obj = entry.as_object()?;
	let id = str_field(obj, "id").filter(|id| !id.trim().is_empty())?;
	let name = str_field(obj, "name")?;
	let level = obj.get("level").and_then(integer)?;
	let x = coordinate(obj, "x", LOGICAL_WIDTH);
	let y = coordinate(obj, "y", LOGICAL_HEIGHT);

	let connections = array_field(obj, "connections")
		.filter_map(|c| {
			let c = c.as_object()?;
			Some(Connection {
				target_id: str_field(c, "targetId")?,
				relationship: str_field(c, "relationship")?,
			})
		})
		.collect();
	let related = array_field(obj, "relatedConcepts")
		.filter_map(|r| {
			let r = r.as_object()?;
			Some(RelatedConcept {
				id: str_field(r, "id")?,
				name: str_field(r, "name")?,
				relationship: str_field(r, "relationship").unwrap_or_default(),
			})
		})
		.collect();

	Some(Concept {
		id,
		name,
		level: Level(level),
		x,
		y,
		connections,
		level_name: str_field(obj, "levelName"),
		description: str_field(obj, "description").unwrap_or_default(),
		reasoning: str_field(obj, "reasoning").unwrap_or_default(),
		related,
	})
}

fn str_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
	obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn array_field<'a>(obj: &'a Map<String, Value>, key: &str) -> impl Iterator<Item = &'a Value> {
	obj.get(key)
		.and_then(Value::as_array)
		.into_iter()
		.flatten()
}

/// Integral numbers only; `2.0` counts, `2.5` and `"2"` do not.
fn integer(v: &Value) -> Option<i64> {
	v.as_i64().or_else(|| {
		v.as_f64()
			.filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
			.map(|f| f as i64)
	})
}

fn coordinate(obj: &Map<String, Value>, key: &str, extent: f64) -> f64 {
	match obj.get(key).and_then(Value::as_f64) {
		Some(v) if v.is_finite() => {
			let clamped = v.clamp(0.0, extent);
			if clamped != v {
				warn!("clamping {key}={v} into [0, {extent}]");
			}
			clamped
		}
		_ => extent / 2.0,
	}
}
