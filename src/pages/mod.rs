use crate::components::*;
use crate::engine::{Stroke, DEFAULT_COLOR, DEFAULT_WIDTH};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Home() -> impl IntoView {
	let color = RwSignal::new(DEFAULT_COLOR.to_owned());
	let width = RwSignal::new(DEFAULT_WIDTH);
	// Derived, not memoized: every untracked read during a prediction tick
	// re-samples the controls.
	let stroke = Signal::derive(move || Stroke::from_controls(&color.get(), width.get()));

	view! {
		<Title text="Sketch"/>
		<div class="Home">
			<Panel title="Brush">
				<StrokeSettings color width/>
			</Panel>
			<SketchBoard stroke/>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}
