use leptos::prelude::*;

#[component]
pub fn Initializing() -> impl IntoView {
	view! { <div class="Initializing">"Starting camera and hand tracker..."</div> }
}

/// Shown in place of the board when initialization fails. The message comes
/// from the error taxonomy, so it already tells the user what to do.
#[component]
pub fn InitFailed(#[prop(into)] message: String) -> impl IntoView {
	view! {
		<div class="InitFailed">
			<p>{message}</p>
			<p>"Fix the above, then reload the page."</p>
		</div>
	}
}
