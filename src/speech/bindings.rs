use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
	/// A Web Speech API recognizer. Chrome still ships the constructor under
	/// the `webkitSpeechRecognition` name, so every binding here is
	/// structural and construction goes through [`constructor`].
	#[derive(Clone)]
	pub type SpeechRecognition;

	#[wasm_bindgen(method, setter, structural, js_name = continuous)]
	pub fn set_continuous(this: &SpeechRecognition, value: bool);

	#[wasm_bindgen(method, setter, structural, js_name = interimResults)]
	pub fn set_interim_results(this: &SpeechRecognition, value: bool);

	#[wasm_bindgen(method, setter, structural, js_name = onresult)]
	pub fn set_onresult(this: &SpeechRecognition, handler: Option<&js_sys::Function>);

	#[wasm_bindgen(method, setter, structural, js_name = onerror)]
	pub fn set_onerror(this: &SpeechRecognition, handler: Option<&js_sys::Function>);

	#[wasm_bindgen(method, setter, structural, js_name = onend)]
	pub fn set_onend(this: &SpeechRecognition, handler: Option<&js_sys::Function>);

	#[wasm_bindgen(method, structural, catch)]
	pub fn start(this: &SpeechRecognition) -> Result<(), JsValue>;

	pub type SpeechRecognitionEvent;

	#[wasm_bindgen(method, getter, structural, js_name = resultIndex)]
	pub fn result_index(this: &SpeechRecognitionEvent) -> u32;

	#[wasm_bindgen(method, getter, structural)]
	pub fn results(this: &SpeechRecognitionEvent) -> SpeechRecognitionResultList;

	pub type SpeechRecognitionResultList;

	#[wasm_bindgen(method, getter, structural)]
	pub fn length(this: &SpeechRecognitionResultList) -> u32;

	#[wasm_bindgen(method, structural, indexing_getter)]
	pub fn get(this: &SpeechRecognitionResultList, index: u32) -> SpeechRecognitionResult;

	pub type SpeechRecognitionResult;

	#[wasm_bindgen(method, getter, structural, js_name = isFinal)]
	pub fn is_final(this: &SpeechRecognitionResult) -> bool;

	#[wasm_bindgen(method, structural, indexing_getter)]
	pub fn get(this: &SpeechRecognitionResult, index: u32) -> SpeechRecognitionAlternative;

	pub type SpeechRecognitionAlternative;

	#[wasm_bindgen(method, getter, structural)]
	pub fn transcript(this: &SpeechRecognitionAlternative) -> String;
}

/// Looks up the platform constructor, preferring the unprefixed name. `None`
/// means the platform has no speech recognition at all.
pub fn constructor() -> Option<js_sys::Function> {
	let window = web_sys::window()?;
	for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
		if let Ok(value) = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(name)) {
			if let Ok(function) = value.dyn_into::<js_sys::Function>() {
				return Some(function);
			}
		}
	}
	None
}
