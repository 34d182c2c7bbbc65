mod bindings;

mod command;
pub use command::*;

use crate::util::JsError;
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Clone, Debug, thiserror::Error)]
pub enum SpeechError {
	#[error("speech recognition is not supported on this platform")]
	Unsupported,

	#[error(transparent)]
	Js(#[from] JsError),
}

static_assertions::assert_impl_all!(SpeechError: std::error::Error, Send, Sync);

/// Continuous, interim-allowed speech recognition that fires `handler` for
/// every finalized transcript matching the command vocabulary.
///
/// The platform recognizer stops itself after silence; the `onend` handler
/// restarts it unconditionally to approximate a continuous stream. Runtime
/// recognition errors are logged only; recovery happens through that restart,
/// never through the error handler.
pub struct VoiceListener {
	_recognition: bindings::SpeechRecognition,
	_on_result: Closure<dyn FnMut(bindings::SpeechRecognitionEvent)>,
	_on_error: Closure<dyn FnMut(JsValue)>,
	_on_end: Closure<dyn FnMut()>,
}

impl VoiceListener {
	pub fn start(mut handler: impl FnMut(Command) + 'static) -> Result<Self, SpeechError> {
		let constructor = bindings::constructor().ok_or(SpeechError::Unsupported)?;
		let recognition = js_sys::Reflect::construct(&constructor, &js_sys::Array::new())
			.map_err(JsError::from)?
			.unchecked_into::<bindings::SpeechRecognition>();
		recognition.set_continuous(true);
		recognition.set_interim_results(true);

		let on_result = Closure::<dyn FnMut(bindings::SpeechRecognitionEvent)>::new(
			move |event: bindings::SpeechRecognitionEvent| {
				for command in finalized_commands(&event) {
					tracing::info!(?command, "voice command recognized");
					handler(command);
				}
			},
		);
		recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));

		let on_error = Closure::<dyn FnMut(JsValue)>::new(|event: JsValue| {
			tracing::error!(?event, "speech recognition error");
		});
		recognition.set_onerror(Some(on_error.as_ref().unchecked_ref()));

		let on_end = {
			let recognition = recognition.clone();
			let restarts = Cell::new(0u64);
			Closure::<dyn FnMut()>::new(move || {
				restarts.set(restarts.get() + 1);
				tracing::debug!(restarts = restarts.get(), "restarting speech recognition");
				if let Err(error) = recognition.start().map_err(JsError::from) {
					tracing::error!(%error, "failed to restart speech recognition");
				}
			})
		};
		recognition.set_onend(Some(on_end.as_ref().unchecked_ref()));

		recognition.start().map_err(JsError::from)?;
		tracing::info!("voice commands enabled");

		Ok(Self {
			_recognition: recognition,
			_on_result: on_result,
			_on_error: on_error,
			_on_end: on_end,
		})
	}

	/// Leaks the listener so the recognition loop and its handlers stay alive
	/// for the lifetime of the page.
	pub fn forget(self) {
		std::mem::forget(self)
	}
}

/// Walks the finalized results of one recognition event, newest batch only
/// (from `resultIndex`), and collects the commands they spell out.
fn finalized_commands(event: &bindings::SpeechRecognitionEvent) -> Vec<Command> {
	let results = event.results();
	(event.result_index()..results.length())
		.filter_map(|index| {
			let result = results.get(index);
			if !result.is_final() {
				return None;
			}
			parse_command(&result.get(0).transcript())
		})
		.collect()
}
