//! Validation of model payloads before they reach the canvas.

use concept_canvas::analysis::parse_concepts;
use concept_canvas::components::concept_canvas::Level;
use concept_canvas::error::AnalysisError;

#[test]
fn test_well_formed_payload() -> Result<(), String> {
	let concepts = parse_concepts(
		r#"{"concepts": [
			{"id": "concept-1", "name": "Consciousness", "level": 0, "levelName": "Potentiality",
			 "description": "source", "reasoning": "fundamental", "x": 150, "y": 120,
			 "connections": [{"targetId": "concept-2", "relationship": "gives rise to"}],
			 "relatedConcepts": [{"id": "concept-2", "name": "Matter", "relationship": "gives rise to"}]},
			{"id": "concept-2", "name": "Matter", "level": 4, "x": 600, "y": 450, "connections": []}
		]}"#,
	)
	.map_err(|e| e.to_string())?;

	assert_eq!(concepts.len(), 2);
	assert_eq!(concepts[0].level, Level(0));
	assert_eq!(concepts[0].level_name.as_deref(), Some("Potentiality"));
	assert_eq!(concepts[0].connections[0].target_id, "concept-2");
	assert_eq!(concepts[0].related[0].name, "Matter");
	assert_eq!((concepts[1].x, concepts[1].y), (600.0, 450.0));
	assert_eq!(concepts[1].description, "");
	Ok(())
}

#[test]
fn test_missing_concepts_key_is_empty() -> Result<(), String> {
	assert!(parse_concepts(r#"{"result": "nothing"}"#).map_err(|e| e.to_string())?.is_empty());
	Ok(())
}

#[test]
fn test_bare_array_and_code_fence() -> Result<(), String> {
	let concepts = parse_concepts("```json\n[{\"id\": \"a\", \"name\": \"A\", \"level\": 1, \"x\": 1, \"y\": 2}]\n```")
		.map_err(|e| e.to_string())?;
	assert_eq!(concepts.len(), 1);
	assert_eq!(concepts[0].id, "a");
	Ok(())
}

#[test]
fn test_non_json_is_malformed() {
	assert!(matches!(
		parse_concepts("I could not find any concepts."),
		Err(AnalysisError::MalformedPayload(_))
	));
	assert!(matches!(
		parse_concepts(r#"{"concepts": "none"}"#),
		Err(AnalysisError::MalformedPayload(_))
	));
}

#[test]
fn test_malformed_entries_are_dropped() -> Result<(), String> {
	let concepts = parse_concepts(
		r#"{"concepts": [
			"not an object",
			{"name": "no id", "level": 1},
			{"id": "", "name": "blank id", "level": 1},
			{"id": "no-level", "name": "x"},
			{"id": "frac", "name": "x", "level": 1.5},
			{"id": "ok", "name": "Kept", "level": 2.0}
		]}"#,
	)
	.map_err(|e| e.to_string())?;
	let ids: Vec<_> = concepts.iter().map(|c| c.id.as_str()).collect();
	assert_eq!(ids, vec!["ok"]);
	assert_eq!(concepts[0].level, Level(2));
	Ok(())
}

#[test]
fn test_duplicate_ids_keep_first() -> Result<(), String> {
	let concepts = parse_concepts(
		r#"[{"id": "a", "name": "First", "level": 0},
			{"id": "a", "name": "Second", "level": 1}]"#,
	)
	.map_err(|e| e.to_string())?;
	assert_eq!(concepts.len(), 1);
	assert_eq!(concepts[0].name, "First");
	Ok(())
}

#[test]
fn test_coordinates_are_sanitized() -> Result<(), String> {
	let concepts = parse_concepts(
		r#"[{"id": "far", "name": "F", "level": 3, "x": 950, "y": 700},
			{"id": "neg", "name": "N", "level": 3, "x": -20, "y": "up"},
			{"id": "none", "name": "Z", "level": 3}]"#,
	)
	.map_err(|e| e.to_string())?;
	let coords: Vec<_> = concepts.iter().map(|c| (c.x, c.y)).collect();
	assert_eq!(coords, vec![(800.0, 600.0), (0.0, 300.0), (400.0, 300.0)]);
	Ok(())
}

#[test]
fn test_out_of_range_level_is_kept() -> Result<(), String> {
	let concepts = parse_concepts(r#"[{"id": "odd", "name": "Odd", "level": 9}]"#).map_err(|e| e.to_string())?;
	assert_eq!(concepts[0].level, Level(9));
	Ok(())
}

#[test]
fn test_bad_connections_dropped_dangling_kept() -> Result<(), String> {
	let concepts = parse_concepts(
		r#"[{"id": "a", "name": "A", "level": 0, "connections": [
			{"targetId": "ghost", "relationship": "haunts"},
			{"targetId": "b"},
			{"relationship": "floats"},
			42
		]}]"#,
	)
	.map_err(|e| e.to_string())?;
	assert_eq!(concepts[0].connections.len(), 1);
	assert_eq!(concepts[0].connections[0].target_id, "ghost");
	Ok(())
}
