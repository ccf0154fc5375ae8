use leptos::prelude::*;

use super::concept_canvas::Level;

/// Color key for the five levels.
#[component]
pub fn Legend() -> impl IntoView {
	view! {
		<div class="legend-panel">
			<h3>"01234 Model Legend"</h3>
			<ul>
				{Level::all()
					.map(|level| {
						view! {
							<li>
								<span class="legend-swatch" style:background-color=level.color() />
								<span class="legend-name">
									{format!("{} {}", level.0, level.name().unwrap_or_default())}
								</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}
