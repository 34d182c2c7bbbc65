use crate::util::{JsError, ResultExt};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Debug, thiserror::Error)]
pub enum CameraError {
	#[error("camera permission was denied; grant access and reload the page")]
	PermissionDenied,

	#[error("no camera was found on this device")]
	NoCamera,

	#[error("media capture is not supported on this platform")]
	Unsupported,

	#[error(transparent)]
	Js(#[from] JsError),
}

static_assertions::assert_impl_all!(CameraError: std::error::Error, Send, Sync);

/// Requests a video-only stream and binds it to the mounted `<video>`
/// element. Single attempt; a denial is fatal to the drawing feature and the
/// caller must surface it, not just log it.
pub async fn acquire_camera(
	video: &web_sys::HtmlVideoElement,
) -> Result<web_sys::MediaStream, CameraError> {
	let window = web_sys::window().ok_or(CameraError::Unsupported)?;
	let media_devices = window
		.navigator()
		.media_devices()
		.map_err(|_| CameraError::Unsupported)?;

	let constraints = web_sys::MediaStreamConstraints::new();
	constraints.set_video(&JsValue::TRUE);
	constraints.set_audio(&JsValue::FALSE);

	let promise = media_devices
		.get_user_media_with_constraints(&constraints)
		.map_err(classify_media_error)?;
	let stream = JsFuture::from(promise)
		.await
		.map_err(classify_media_error)?
		.dyn_into::<web_sys::MediaStream>()
		.map_err(|value| CameraError::Js(JsError::from(value)))?;

	video.set_src_object(Some(&stream));
	// Autoplay may be blocked until a user gesture; log and continue.
	video.play().map_err(JsError::from).ok_or_log();

	Ok(stream)
}

fn classify_media_error(value: JsValue) -> CameraError {
	if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
		match exception.name().as_str() {
			"NotAllowedError" | "SecurityError" => return CameraError::PermissionDenied,
			"NotFoundError" | "OverconstrainedError" => return CameraError::NoCamera,
			_ => {}
		}
	}
	CameraError::Js(JsError::from(value))
}
