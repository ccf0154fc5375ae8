//! Pure scene construction: model + view + surface size in, draw commands out.
//!
//! Nothing here touches the DOM, so the full draw pass can be inspected in
//! tests. [`super::render`] replays the commands onto a 2D context.

use super::state::{DeviceSize, NODE_RADIUS, Point, ViewState};
use super::types::{Concept, GraphModel};

pub const EDGE_COLOR: &str = "#CBD5E1";
pub const LABEL_BACKING: &str = "rgba(255, 255, 255, 0.8)";
pub const LABEL_COLOR: &str = "#334155";
pub const LABEL_FONT: &str = "bold 11px sans-serif";
pub const BADGE_FILL: &str = "rgba(255, 255, 255, 0.9)";
pub const BADGE_FONT: &str = "bold 12px sans-serif";
pub const NAME_FONT: &str = "bold 14px sans-serif";
pub const NODE_OUTLINE: &str = "#FFFFFF";

pub const BADGE_RADIUS: f64 = 12.0;
pub const BADGE_OFFSET: f64 = 25.0;
pub const GLOW_RADIUS: f64 = 60.0;
/// Names longer than this are cut to `MAX_NAME_CHARS - 3` plus an ellipsis.
pub const MAX_NAME_CHARS: usize = 15;

/// Measures rendered text width in device units for a CSS font string.
pub trait TextMeasure {
	fn text_width(&self, text: &str, font: &str) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
	Start,
	Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
	Alphabetic,
	Middle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Clear {
		width: f64,
		height: f64,
	},
	PushTransform {
		offset: Point,
		scale: f64,
	},
	PopTransform,
	Line {
		from: Point,
		to: Point,
		color: String,
		width: f64,
	},
	FillRect {
		x: f64,
		y: f64,
		width: f64,
		height: f64,
		color: String,
	},
	Circle {
		center: Point,
		radius: f64,
		fill: String,
		stroke: Option<(String, f64)>,
	},
	Text {
		text: String,
		at: Point,
		font: &'static str,
		color: String,
		align: TextAlign,
		baseline: TextBaseline,
	},
	/// Filled disc of `outer_radius` with a radial gradient from `color`
	/// at `inner_radius` to transparent at `outer_radius`.
	Glow {
		center: Point,
		inner_radius: f64,
		outer_radius: f64,
		color: String,
	},
}

/// Name as drawn inside the node.
pub fn display_name(name: &str) -> String {
	if name.chars().count() > MAX_NAME_CHARS {
		let head: String = name.chars().take(MAX_NAME_CHARS - 3).collect();
		format!("{head}...")
	} else {
		name.to_owned()
	}
}

pub fn build_scene(
	model: &GraphModel,
	view: &ViewState,
	size: DeviceSize,
	measure: &dyn TextMeasure,
) -> Vec<DrawCommand> {
	let mut out = vec![
		DrawCommand::Clear {
			width: size.width,
			height: size.height,
		},
		DrawCommand::PushTransform {
			offset: view.offset,
			scale: view.scale,
		},
	];
	push_edges(&mut out, model, size, measure);
	for concept in model.concepts() {
		push_node(&mut out, concept, size);
	}
	if view.show_effects {
		for concept in model.concepts() {
			push_glow(&mut out, concept, size);
		}
	}
	out.push(DrawCommand::PopTransform);
	out
}

fn push_edges(
	out: &mut Vec<DrawCommand>,
	model: &GraphModel,
	size: DeviceSize,
	measure: &dyn TextMeasure,
) {
	for (source, conn, target) in model.edges() {
		let (from, to) = (size.concept_position(source), size.concept_position(target));
		out.push(DrawCommand::Line {
			from,
			to,
			color: EDGE_COLOR.into(),
			width: 1.0,
		});

		let mid = from.midpoint(to);
		let text_width = measure.text_width(&conn.relationship, LABEL_FONT);
		out.push(DrawCommand::FillRect {
			x: mid.x - text_width / 2.0 - 4.0,
			y: mid.y - 12.0,
			width: text_width + 8.0,
			height: 16.0,
			color: LABEL_BACKING.into(),
		});
		out.push(DrawCommand::Text {
			text: conn.relationship.clone(),
			at: Point::new(mid.x, mid.y - 5.0),
			font: LABEL_FONT,
			color: LABEL_COLOR.into(),
			align: TextAlign::Center,
			baseline: TextBaseline::Alphabetic,
		});
	}
}

fn push_node(out: &mut Vec<DrawCommand>, concept: &Concept, size: DeviceSize) {
	let center = size.concept_position(concept);
	let color = concept.level.color();
	out.push(DrawCommand::Circle {
		center,
		radius: NODE_RADIUS,
		fill: color.into(),
		stroke: Some((NODE_OUTLINE.into(), 2.0)),
	});

	let badge = Point::new(center.x + BADGE_OFFSET, center.y - BADGE_OFFSET);
	out.push(DrawCommand::Circle {
		center: badge,
		radius: BADGE_RADIUS,
		fill: BADGE_FILL.into(),
		stroke: None,
	});
	out.push(DrawCommand::Text {
		text: concept.level.0.to_string(),
		at: badge,
		font: BADGE_FONT,
		color: color.into(),
		align: TextAlign::Center,
		baseline: TextBaseline::Middle,
	});

	out.push(DrawCommand::Text {
		text: display_name(&concept.name),
		at: center,
		font: NAME_FONT,
		color: NODE_OUTLINE.into(),
		align: TextAlign::Center,
		baseline: TextBaseline::Middle,
	});
}

fn push_glow(out: &mut Vec<DrawCommand>, concept: &Concept, size: DeviceSize) {
	out.push(DrawCommand::Glow {
		center: size.concept_position(concept),
		inner_radius: NODE_RADIUS,
		outer_radius: GLOW_RADIUS,
		// 0x33 alpha suffix on the #RRGGBB palette entry
		color: format!("{}33", concept.level.color()),
	});
}
