use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
	/// The model object returned by `ml5.handpose`. The library is loaded by
	/// the host page next to the WASM bundle.
	pub type Handpose;

	#[wasm_bindgen(js_namespace = ml5, js_name = handpose, catch)]
	pub fn handpose(
		video: &web_sys::HtmlVideoElement,
		on_ready: &js_sys::Function,
	) -> Result<Handpose, JsValue>;

	/// Registers `handler` for a named event stream, e.g. `"predict"`.
	#[wasm_bindgen(method, catch)]
	pub fn on(this: &Handpose, event: &str, handler: &js_sys::Function) -> Result<(), JsValue>;
}
