use leptos::prelude::*;

use super::concept_canvas::{Concept, GraphModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailsTab {
	Reasoning,
	Relationships,
}

/// Side panel for the selected concept. Resolves the id against the current
/// model so a stale selection simply renders nothing.
#[component]
pub fn ConceptDetails(
	#[prop(into)] concepts: Signal<GraphModel>,
	#[prop(into)] selected: Signal<Option<String>>,
	#[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
	let concept = Memo::new(move |_| {
		selected.with(|id| {
			id.as_deref()
				.and_then(|id| concepts.with(|m| m.find(id).cloned()))
		})
	});
	let tab = RwSignal::new(DetailsTab::Reasoning);

	move || {
		concept.get().map(|c: Concept| {
			let level_label = c.level_label();
			let Concept {
				name,
				level,
				description,
				reasoning,
				related,
				..
			} = c;
			let tab_body = move || match tab.get() {
				DetailsTab::Reasoning => view! {
					<div class="reasoning">
						<h4>"Categorization Reasoning"</h4>
						<p>{reasoning.clone()}</p>
					</div>
				}
				.into_any(),
				DetailsTab::Relationships => view! {
					<ul class="related">
						{related
							.iter()
							.map(|r| {
								view! {
									<li>
										<span class="related-name">{r.name.clone()}</span>
										<span class="related-rel">{r.relationship.clone()}</span>
									</li>
								}
							})
							.collect_view()}
					</ul>
				}
				.into_any(),
			};
			view! {
				<aside class="details-panel">
					<header>
						<h2>"Concept Details"</h2>
						<button class="close" on:click=move |_| on_close.run(())>
							"×"
						</button>
					</header>
					<div class="details-card">
						<div class="details-title">
							<h3>{name}</h3>
							<span class="level-badge" style:background-color=level.color()>
								{level_label}
							</span>
						</div>
						<p class="description">{description}</p>
						<nav class="tabs">
							<button
								class:selected=move || tab.get() == DetailsTab::Reasoning
								on:click=move |_| tab.set(DetailsTab::Reasoning)
							>
								"Reasoning"
							</button>
							<button
								class:selected=move || tab.get() == DetailsTab::Relationships
								on:click=move |_| tab.set(DetailsTab::Relationships)
							>
								"Relationships"
							</button>
						</nav>
						{tab_body}
					</div>
				</aside>
			}
		})
	}
}
