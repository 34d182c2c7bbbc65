use super::{Stroke, Surface, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::util::JsError;
use glam::Vec2;
use wasm_bindgen::JsCast;

#[derive(Clone, Debug, thiserror::Error)]
pub enum CanvasError {
	#[error("2d canvas context unavailable")]
	ContextUnavailable,

	#[error(transparent)]
	Js(#[from] JsError),
}

static_assertions::assert_impl_all!(CanvasError: std::error::Error, Send, Sync);

/// `Surface` over a `CanvasRenderingContext2d`. Segments are plain stroked
/// line paths; no smoothing or interpolation happens at this level.
pub struct CanvasSurface {
	context: web_sys::CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: &web_sys::HtmlCanvasElement) -> Result<Self, CanvasError> {
		let context = canvas
			.get_context("2d")
			.map_err(JsError::from)?
			.ok_or(CanvasError::ContextUnavailable)?
			.dyn_into::<web_sys::CanvasRenderingContext2d>()
			.map_err(|_| CanvasError::ContextUnavailable)?;
		Ok(Self { context })
	}
}

impl Surface for CanvasSurface {
	fn draw_segment(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
		self.context.set_stroke_style_str(&stroke.css_color());
		self.context.set_line_width(stroke.width);
		self.context.begin_path();
		self.context.move_to(from.x as f64, from.y as f64);
		self.context.line_to(to.x as f64, to.y as f64);
		self.context.stroke();
	}

	fn clear(&mut self) {
		self.context
			.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
	}
}
