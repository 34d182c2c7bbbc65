use leptos::prelude::*;

/// Color picker, stroke width slider, and a live width readout. The engine
/// samples these signals untracked on every prediction tick, so a change
/// takes effect on the next drawn segment.
#[component]
pub fn StrokeSettings(color: RwSignal<String>, width: RwSignal<f64>) -> impl IntoView {
	view! {
		<div class="StrokeSettings">
			<label class="StrokeColor">
				"Color"
				<input
					type="color"
					prop:value=move || color.get()
					on:input=move |ev| color.set(event_target_value(&ev))
				/>
			</label>
			<label class="StrokeWidth">
				"Width"
				<input
					type="range"
					min="1"
					max="50"
					step="1"
					prop:value=move || width.get().to_string()
					on:input=move |ev| {
						if let Ok(value) = event_target_value(&ev).parse() {
							width.set(value);
						}
					}
				/>
				<span class="StrokeWidthDisplay">{move || width.get()}</span>
			</label>
		</div>
	}
}
