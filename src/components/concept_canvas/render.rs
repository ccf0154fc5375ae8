use std::f64::consts::PI;

use log::warn;
use web_sys::CanvasRenderingContext2d;

use super::scene::{DrawCommand, TextAlign, TextBaseline, TextMeasure};
use crate::error::CanvasError;

/// Text measurement backed by the live 2D context.
pub struct ContextMeasure<'a>(pub &'a CanvasRenderingContext2d);

impl TextMeasure for ContextMeasure<'_> {
	fn text_width(&self, text: &str, font: &str) -> f64 {
		self.0.set_font(font);
		match self.0.measure_text(text) {
			Ok(metrics) => metrics.width(),
			Err(e) => {
				warn!("measure_text failed: {e:?}");
				0.0
			}
		}
	}
}

/// Replays a scene. A failing command is logged and skipped.
pub fn paint(ctx: &CanvasRenderingContext2d, scene: &[DrawCommand]) {
	for cmd in scene {
		if let Err(e) = paint_one(ctx, cmd) {
			warn!("draw command {cmd:?} failed: {e}");
		}
	}
}

fn paint_one(ctx: &CanvasRenderingContext2d, cmd: &DrawCommand) -> Result<(), CanvasError> {
	match cmd {
		DrawCommand::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
		DrawCommand::PushTransform { offset, scale } => {
			ctx.save();
			ctx.translate(offset.x, offset.y)?;
			ctx.scale(*scale, *scale)?;
		}
		DrawCommand::PopTransform => ctx.restore(),
		DrawCommand::Line {
			from,
			to,
			color,
			width,
		} => {
			ctx.begin_path();
			ctx.move_to(from.x, from.y);
			ctx.line_to(to.x, to.y);
			ctx.set_stroke_style_str(color);
			ctx.set_line_width(*width);
			ctx.stroke();
		}
		DrawCommand::FillRect {
			x,
			y,
			width,
			height,
			color,
		} => {
			ctx.set_fill_style_str(color);
			ctx.fill_rect(*x, *y, *width, *height);
		}
		DrawCommand::Circle {
			center,
			radius,
			fill,
			stroke,
		} => {
			ctx.begin_path();
			ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI)?;
			ctx.set_fill_style_str(fill);
			ctx.fill();
			if let Some((color, width)) = stroke {
				ctx.set_stroke_style_str(color);
				ctx.set_line_width(*width);
				ctx.stroke();
			}
		}
		DrawCommand::Text {
			text,
			at,
			font,
			color,
			align,
			baseline,
		} => {
			ctx.set_fill_style_str(color);
			ctx.set_font(font);
			ctx.set_text_align(match align {
				TextAlign::Start => "start",
				TextAlign::Center => "center",
			});
			ctx.set_text_baseline(match baseline {
				TextBaseline::Alphabetic => "alphabetic",
				TextBaseline::Middle => "middle",
			});
			ctx.fill_text(text, at.x, at.y)?;
		}
		DrawCommand::Glow {
			center,
			inner_radius,
			outer_radius,
			color,
		} => {
			let gradient = ctx.create_radial_gradient(
				center.x,
				center.y,
				*inner_radius,
				center.x,
				center.y,
				*outer_radius,
			)?;
			gradient.add_color_stop(0.0, color)?;
			gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)")?;
			ctx.begin_path();
			ctx.arc(center.x, center.y, *outer_radius, 0.0, 2.0 * PI)?;
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
	}
	Ok(())
}
