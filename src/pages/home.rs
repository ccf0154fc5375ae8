use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::analysis::config::build_time_api_key;
use crate::analysis::{AnalysisClient, AnalysisConfig};
use crate::components::concept_canvas::{ConceptCanvas, GraphModel};
use crate::components::details::ConceptDetails;
use crate::components::legend::Legend;

/// Text input, concept canvas, legend and details panel.
#[component]
pub fn Home() -> impl IntoView {
	let text = RwSignal::new(String::new());
	let api_key = RwSignal::new(build_time_api_key().unwrap_or_default().to_owned());
	let model = RwSignal::new(GraphModel::default());
	let selected = RwSignal::new(None::<String>);
	let is_loading = RwSignal::new(false);
	let last_error = RwSignal::new(None::<String>);

	let analyze = move |_| {
		let input = text.get_untracked();
		if input.trim().is_empty() || is_loading.get_untracked() {
			return;
		}
		let client = match AnalysisClient::new(AnalysisConfig::default(), api_key.get_untracked()) {
			Ok(client) => client,
			Err(e) => {
				last_error.set(Some(e.to_string()));
				return;
			}
		};
		is_loading.set(true);
		last_error.set(None);
		spawn_local(async move {
			match client.analyze(&input).await {
				Ok(concepts) => {
					info!("rendering {} concepts", concepts.len());
					selected.set(None);
					model.set(GraphModel::new(concepts));
				}
				Err(e) => {
					error!("analysis failed: {e}");
					last_error.set(Some(e.to_string()));
				}
			}
			is_loading.set(false);
		});
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="layout">
				<header class="app-header">
					<h1>"01234 Concept Map"</h1>
					<input
						type="password"
						placeholder="sk-..."
						prop:value=move || api_key.get()
						on:input=move |ev| api_key.set(event_target_value(&ev))
					/>
				</header>
				<section class="text-input">
					<textarea
						placeholder="Paste text to analyze"
						prop:value=move || text.get()
						on:input=move |ev| text.set(event_target_value(&ev))
					/>
					<button on:click=analyze disabled=move || is_loading.get()>
						{move || if is_loading.get() { "Analyzing..." } else { "Analyze Concepts" }}
					</button>
					{move || last_error.get().map(|e| view! { <p class="error">{e}</p> })}
				</section>
				<main class="workspace">
					<div class="canvas-host">
						<ConceptCanvas
							concepts=model
							is_loading=is_loading
							on_select=move |id: String| selected.set(Some(id))
						/>
						<Legend />
					</div>
					<ConceptDetails
						concepts=model
						selected=selected
						on_close=move |_: ()| selected.set(None)
					/>
				</main>
			</div>
		</ErrorBoundary>
	}
}
