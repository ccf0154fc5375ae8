use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

use crate::error::CanvasError;

pub const EXPORT_FILE_NAME: &str = "01234-concept-map.png";

/// PNG data URL of whatever the canvas currently shows. `None` when there is
/// nothing to export.
pub fn canvas_png(
	canvas: Option<&HtmlCanvasElement>,
	concept_count: usize,
) -> Result<Option<String>, CanvasError> {
	match canvas {
		Some(canvas) if concept_count > 0 => Ok(Some(canvas.to_data_url_with_type("image/png")?)),
		_ => Ok(None),
	}
}

/// Hands the current canvas to the browser as a PNG download.
pub fn download_png(
	canvas: Option<&HtmlCanvasElement>,
	concept_count: usize,
) -> Result<(), CanvasError> {
	let Some(data_url) = canvas_png(canvas, concept_count)? else {
		return Ok(());
	};
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| CanvasError::Js("no document".into()))?;
	let link: HtmlAnchorElement = document
		.create_element("a")?
		.dyn_into()
		.map_err(|_| CanvasError::Js("created element is not an anchor".into()))?;
	link.set_download(EXPORT_FILE_NAME);
	link.set_href(&data_url);
	link.click();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_surface_is_a_no_op() {
		assert_eq!(canvas_png(None, 4), Ok(None));
	}
}
