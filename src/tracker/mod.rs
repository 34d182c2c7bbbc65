mod bindings;

use crate::util::JsError;
use glam::Vec2;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Landmark index of the index finger's tip in the model's 21-point schema.
pub const INDEX_FINGERTIP: usize = 8;

/// One detected hand. Landmarks arrive as 2D or 3D coordinates; only the
/// first two dimensions are kept.
#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
	pub landmarks: Vec<Vec2>,
}

impl Hand {
	pub fn fingertip(&self) -> Option<Vec2> {
		self.landmarks.get(INDEX_FINGERTIP).copied()
	}
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum TrackerError {
	#[error("handpose model unavailable: {0}")]
	Unavailable(JsError),

	#[error("handpose model never became ready")]
	ReadyDropped,
}

static_assertions::assert_impl_all!(TrackerError: std::error::Error, Send, Sync);

/// Adapter over the external hand-landmark model. Constructed against the
/// live video element; once loaded it pushes one prediction event per
/// processed video frame to the registered handler. Frame rate and latency
/// are entirely the model's; no throttling is added here.
pub struct HandTracker {
	model: bindings::Handpose,
	_on_ready: Closure<dyn FnMut()>,
	on_predict: RefCell<Option<Closure<dyn FnMut(JsValue)>>>,
}

impl HandTracker {
	/// Loads the model against `video`, resolving once its ready callback
	/// fires.
	pub async fn load(video: &web_sys::HtmlVideoElement) -> Result<Self, TrackerError> {
		let (ready_tx, ready_rx) = futures::channel::oneshot::channel();
		let ready_tx = RefCell::new(Some(ready_tx));
		let on_ready = Closure::<dyn FnMut()>::new(move || {
			if let Some(tx) = ready_tx.borrow_mut().take() {
				let _ = tx.send(());
			}
		});

		let model = bindings::handpose(video, on_ready.as_ref().unchecked_ref())
			.map_err(|value| TrackerError::Unavailable(value.into()))?;
		ready_rx.await.map_err(|_| TrackerError::ReadyDropped)?;
		tracing::info!("handpose model ready");

		Ok(Self {
			model,
			_on_ready: on_ready,
			on_predict: RefCell::new(None),
		})
	}

	/// Subscribes `handler` to the prediction event stream. Predictions are
	/// parsed before the handler runs; malformed hands are skipped.
	pub fn on_predict(
		&self,
		mut handler: impl FnMut(Vec<Hand>) + 'static,
	) -> Result<(), TrackerError> {
		let closure = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
			handler(parse_predictions(&value));
		});
		self.model
			.on("predict", closure.as_ref().unchecked_ref())
			.map_err(|value| TrackerError::Unavailable(value.into()))?;
		*self.on_predict.borrow_mut() = Some(closure);
		Ok(())
	}

	/// Leaks the tracker so its callbacks stay valid for the lifetime of the
	/// page. There is no way to stop the model once started.
	pub fn forget(self) {
		std::mem::forget(self)
	}
}

/// Converts a raw prediction event into typed hands. The event is a JS array
/// of objects, each carrying a `landmarks` array of `[x, y, z]` coordinates.
pub fn parse_predictions(value: &JsValue) -> Vec<Hand> {
	let Some(results) = value.dyn_ref::<js_sys::Array>() else {
		tracing::warn!("prediction event was not an array");
		return Vec::new();
	};
	results
		.iter()
		.filter_map(|entry| {
			let hand = parse_hand(&entry);
			if hand.is_none() {
				tracing::warn!("skipping malformed hand prediction");
			}
			hand
		})
		.collect()
}

fn parse_hand(entry: &JsValue) -> Option<Hand> {
	let landmarks = js_sys::Reflect::get(entry, &JsValue::from_str("landmarks")).ok()?;
	let landmarks = landmarks.dyn_into::<js_sys::Array>().ok()?;
	let mut points = Vec::with_capacity(landmarks.length() as usize);
	for landmark in landmarks.iter() {
		let landmark = landmark.dyn_into::<js_sys::Array>().ok()?;
		let x = landmark.get(0).as_f64()?;
		let y = landmark.get(1).as_f64()?;
		points.push(Vec2::new(x as f32, y as f32));
	}
	Some(Hand { landmarks: points })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fingertip_requires_a_full_landmark_set() {
		let hand = Hand {
			landmarks: vec![Vec2::ZERO; 8],
		};
		assert_eq!(hand.fingertip(), None);

		let mut landmarks = vec![Vec2::ZERO; 21];
		landmarks[INDEX_FINGERTIP] = Vec2::new(3.0, 4.0);
		let hand = Hand { landmarks };
		assert_eq!(hand.fingertip(), Some(Vec2::new(3.0, 4.0)));
	}
}
