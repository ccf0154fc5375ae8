use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::export;
use super::render::{self, ContextMeasure};
use super::scene::build_scene;
use super::state::{CanvasPhase, CanvasState, ClickPolicy, DeviceSize, Point, ViewState};
use super::types::GraphModel;
use crate::error::CanvasError;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")?
		.ok_or(CanvasError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| CanvasError::ContextUnavailable)
}

fn redraw(
	canvas: &HtmlCanvasElement,
	model: &GraphModel,
	view: &ViewState,
	size: DeviceSize,
) -> Result<(), CanvasError> {
	let ctx = context_2d(canvas)?;
	let scene = build_scene(model, view, size, &ContextMeasure(&ctx));
	render::paint(&ctx, &scene);
	Ok(())
}

/// Resizes the backing store to the container and reports the new size.
fn fit_to_container(canvas: &HtmlCanvasElement) -> DeviceSize {
	let size = canvas
		.parent_element()
		.map(|p| DeviceSize::for_container(p.client_width() as f64, p.client_height() as f64))
		.unwrap_or_default();
	canvas.set_width(size.width as u32);
	canvas.set_height(size.height as u32);
	size
}

fn pointer_pos(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

#[component]
pub fn ConceptCanvas(
	#[prop(into)] concepts: Signal<GraphModel>,
	#[prop(into)] is_loading: Signal<bool>,
	#[prop(into)] on_select: Callback<String>,
	#[prop(default = ClickPolicy::default())] click_policy: ClickPolicy,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = RwSignal::new(CanvasState::with_policy(click_policy));
	let size = RwSignal::new(DeviceSize::default());
	let view = Memo::new(move |_| state.with(|s| s.view));
	let phase = Memo::new(move |_| {
		CanvasPhase::select(is_loading.get(), concepts.with(GraphModel::len))
	});

	// Size the backing store whenever a canvas is mounted.
	Effect::new(move |_| {
		if let Some(canvas) = canvas_ref.get() {
			size.set(fit_to_container(&canvas));
		}
	});

	let resize = window_event_listener(ev::resize, move |_| {
		if let Some(canvas) = canvas_ref.get_untracked() {
			let new_size = fit_to_container(&canvas);
			debug!("canvas resized to {}x{}", new_size.width, new_size.height);
			size.set(new_size);
		}
	});
	on_cleanup(move || resize.remove());

	Effect::new(move |_| {
		let (view, size) = (view.get(), size.get());
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		concepts.with(|model| {
			if let Err(e) = redraw(&canvas, model, &view, size) {
				warn!("redraw failed: {e}");
			}
		});
	});

	let on_mousedown = move |ev: MouseEvent| {
		if let Some(canvas) = canvas_ref.get_untracked() {
			let pos = pointer_pos(&canvas, &ev);
			state.update(|s| s.pointer_down(ev.button(), pos));
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		if !state.with_untracked(|s| s.gesture.is_dragging) {
			return;
		}
		if let Some(canvas) = canvas_ref.get_untracked() {
			let pos = pointer_pos(&canvas, &ev);
			state.update(|s| {
				s.pointer_move(pos);
			});
		}
	};

	let on_release = move |_: MouseEvent| state.update(CanvasState::pointer_up);

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (pos, size) = (pointer_pos(&canvas, &ev), size.get_untracked());
		let selected = concepts
			.with_untracked(|model| state.try_update(|s| s.click(model, size, pos)))
			.flatten();
		if let Some(id) = selected {
			debug!("concept selected: {id}");
			on_select.run(id);
		}
	};

	let on_export = move |_| {
		let count = concepts.with_untracked(GraphModel::len);
		if let Err(e) = export::download_png(canvas_ref.get_untracked().as_ref(), count) {
			warn!("export failed: {e}");
		}
	};

	let cursor = move || {
		if state.with(|s| s.gesture.is_dragging) {
			"grabbing"
		} else {
			"grab"
		}
	};

	move || match phase.get() {
		CanvasPhase::Loading => view! {
			<div class="concept-canvas concept-canvas--loading">
				<div class="spinner" />
			</div>
		}
		.into_any(),
		CanvasPhase::Empty => view! {
			<div class="concept-canvas concept-canvas--empty">
				<svg
					xmlns="http://www.w3.org/2000/svg"
					width="64"
					height="64"
					viewBox="0 0 24 24"
					fill="none"
					stroke="currentColor"
					stroke-width="1"
				>
					<circle cx="12" cy="12" r="10" />
					<line x1="2" y1="12" x2="22" y2="12" />
				</svg>
				<p class="placeholder-title">"No concepts to visualize"</p>
				<p class="placeholder-hint">"Enter text and click \"Analyze Concepts\" to begin"</p>
			</div>
		}
		.into_any(),
		CanvasPhase::Populated => view! {
			<div class="concept-canvas">
				<div class="canvas-toolbar">
					<button title="Zoom In" on:click=move |_| state.update(|s| s.view.zoom_in())>
						"+"
					</button>
					<button title="Zoom Out" on:click=move |_| state.update(|s| s.view.zoom_out())>
						"−"
					</button>
					<button title="Reset View" on:click=move |_| state.update(|s| s.view.reset())>
						"⟳"
					</button>
					<button
						title="Toggle Visual Effects"
						class:active=move || view.get().show_effects
						on:click=move |_| state.update(|s| s.view.toggle_effects())
					>
						"✦"
					</button>
					<button title="Export as PNG" on:click=on_export>
						"⤓"
					</button>
				</div>
				<div class="zoom-badge">{move || format!("Zoom: {}%", view.get().zoom_percent())}</div>
				<canvas
					node_ref=canvas_ref
					on:click=on_click
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=on_release
					on:mouseleave=on_release
					style="display: block;"
					style:cursor=cursor
				/>
			</div>
		}
		.into_any(),
	}
}
