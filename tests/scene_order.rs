//! Draw-pass structure: ordering, geometry and degenerate inputs.

use concept_canvas::components::concept_canvas::scene::{
	DrawCommand, MAX_NAME_CHARS, TextMeasure, build_scene, display_name,
};
use concept_canvas::components::concept_canvas::types::FALLBACK_COLOR;
use concept_canvas::components::concept_canvas::{Concept, DeviceSize, GraphModel, Level, Point, ViewState};

struct MonoMeasure;

impl TextMeasure for MonoMeasure {
	fn text_width(&self, text: &str, _font: &str) -> f64 {
		text.len() as f64 * 7.0
	}
}

fn kind(cmd: &DrawCommand) -> &'static str {
	match cmd {
		DrawCommand::Clear { .. } => "clear",
		DrawCommand::PushTransform { .. } => "push",
		DrawCommand::PopTransform => "pop",
		DrawCommand::Line { .. } => "line",
		DrawCommand::FillRect { .. } => "rect",
		DrawCommand::Circle { .. } => "circle",
		DrawCommand::Text { .. } => "text",
		DrawCommand::Glow { .. } => "glow",
	}
}

fn pair() -> GraphModel {
	GraphModel::new(vec![
		Concept::new("a", "Alpha", 0, 100.0, 100.0).connect("b", "shapes"),
		Concept::new("b", "Beta", 4, 700.0, 500.0),
	])
}

#[test]
fn test_edges_then_nodes_then_glow() {
	let view = ViewState {
		show_effects: true,
		..ViewState::default()
	};
	let scene = build_scene(&pair(), &view, DeviceSize::default(), &MonoMeasure);
	let kinds: Vec<_> = scene.iter().map(kind).collect();
	assert_eq!(
		kinds,
		vec![
			"clear", "push", //
			"line", "rect", "text", //
			"circle", "circle", "text", "text", //
			"circle", "circle", "text", "text", //
			"glow", "glow", //
			"pop",
		]
	);
}

#[test]
fn test_label_sits_at_segment_midpoint() {
	let size = DeviceSize::default();
	let model = pair();
	let scene = build_scene(&model, &ViewState::default(), size, &MonoMeasure);
	let (a, b) = (
		size.concept_position(&model.concepts()[0]),
		size.concept_position(&model.concepts()[1]),
	);
	let mid = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
	assert_eq!(mid, Point::new(400.0, 300.0));

	let label = scene.iter().find_map(|c| match c {
		DrawCommand::Text { text, at, .. } if text == "shapes" => Some(*at),
		_ => None,
	});
	assert_eq!(label, Some(Point::new(mid.x, mid.y - 5.0)));

	let backing = scene.iter().find_map(|c| match c {
		DrawCommand::FillRect {
			x,
			y,
			width,
			height,
			..
		} => Some((*x, *y, *width, *height)),
		_ => None,
	});
	// "shapes" measures 42
	assert_eq!(backing, Some((400.0 - 21.0 - 4.0, 288.0, 50.0, 16.0)));
}

#[test]
fn test_view_transform_is_pushed_verbatim() {
	let view = ViewState {
		scale: 1.3,
		offset: Point::new(12.0, -4.0),
		show_effects: false,
	};
	let scene = build_scene(&pair(), &view, DeviceSize::new(400.0, 300.0), &MonoMeasure);
	assert_eq!(
		scene[..2],
		[
			DrawCommand::Clear {
				width: 400.0,
				height: 300.0
			},
			DrawCommand::PushTransform {
				offset: Point::new(12.0, -4.0),
				scale: 1.3
			},
		]
	);
	assert_eq!(scene.last(), Some(&DrawCommand::PopTransform));
}

#[test]
fn test_fill_follows_level_palette() {
	let model = GraphModel::new(
		(-1..=5)
			.map(|level| Concept::new(format!("c{level}"), "C", level, 50.0, 50.0))
			.collect(),
	);
	let scene = build_scene(&model, &ViewState::default(), DeviceSize::default(), &MonoMeasure);
	let fills: Vec<_> = scene
		.iter()
		.filter_map(|c| match c {
			DrawCommand::Circle { fill, radius, .. } if *radius == 35.0 => Some(fill.clone()),
			_ => None,
		})
		.collect();
	let expected: Vec<String> = (-1..=5)
		.map(|level| match level {
			0..=4 => Level(level).color().to_owned(),
			_ => FALLBACK_COLOR.to_owned(),
		})
		.collect();
	assert_eq!(fills, expected);
}

#[test]
fn test_self_loop_renders_zero_length_edge() {
	let model = GraphModel::new(vec![
		Concept::new("loop", "Ouroboros", 2, 200.0, 150.0).connect("loop", "feeds on"),
	]);
	let scene = build_scene(&model, &ViewState::default(), DeviceSize::default(), &MonoMeasure);
	let line = scene.iter().find_map(|c| match c {
		DrawCommand::Line { from, to, .. } => Some((*from, *to)),
		_ => None,
	});
	assert_eq!(line, Some((Point::new(200.0, 150.0), Point::new(200.0, 150.0))));
	assert!(scene.iter().any(|c| matches!(
		c,
		DrawCommand::Text { text, at, .. } if text == "feeds on" && *at == Point::new(200.0, 145.0)
	)));
}

#[test]
fn test_dangling_connection_draws_nothing() {
	let model = GraphModel::new(vec![Concept::new("a", "A", 0, 1.0, 1.0).connect("nowhere", "points at")]);
	let scene = build_scene(&model, &ViewState::default(), DeviceSize::default(), &MonoMeasure);
	assert!(!scene.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
}

#[test]
fn test_name_truncation_boundary() {
	let exact = "a".repeat(MAX_NAME_CHARS);
	assert_eq!(display_name(&exact), exact);
	assert_eq!(display_name("Transcendental unity"), "Transcendent...");
}

#[test]
fn test_empty_model_only_clears() {
	let scene = build_scene(&GraphModel::default(), &ViewState::default(), DeviceSize::default(), &MonoMeasure);
	assert_eq!(scene.iter().map(kind).collect::<Vec<_>>(), vec!["clear", "push", "pop"]);
}
