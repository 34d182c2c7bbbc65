mod stroke;
pub use stroke::*;

mod canvas;
pub use canvas::*;

use crate::tracker::Hand;
use glam::Vec2;

/// Fixed bounds of the drawing region, matching the video feed resolution.
pub const CANVAS_WIDTH: u32 = 640;
pub const CANVAS_HEIGHT: u32 = 480;

/// Something segments can be rasterized onto. The production implementation
/// wraps the 2D canvas context; tests record the calls instead.
pub trait Surface {
	fn draw_segment(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);
	fn clear(&mut self);
}

/// The two-point drawing state machine. Holds exactly one point of memory:
/// the fingertip position from the previous prediction tick, if the hand was
/// detected on that tick.
pub struct SketchEngine<S> {
	surface: S,
	previous: Option<Vec2>,
}

impl<S: Surface> SketchEngine<S> {
	pub fn new(surface: S) -> Self {
		Self {
			surface,
			previous: None,
		}
	}

	/// One prediction tick. A segment is drawn iff both the previous and the
	/// current fingertip are known within one uninterrupted detection run;
	/// `stroke` applies to the segment this tick terminates, never to a later
	/// one. Hands beyond the first are ignored.
	pub fn handle_frame(&mut self, hands: &[Hand], stroke: &Stroke) {
		let Some(tip) = hands.first().and_then(Hand::fingertip) else {
			// Lost tracking. The next fingertip only seeds state again.
			self.previous = None;
			return;
		};
		if let Some(previous) = self.previous {
			self.surface.draw_segment(previous, tip, stroke);
		}
		self.previous = Some(tip);
	}

	/// Erases the whole drawing region and forgets the previous point, so the
	/// next fingertip never connects back to a pre-clear position. Idempotent.
	pub fn clear(&mut self) {
		self.surface.clear();
		self.previous = None;
	}

	pub fn previous(&self) -> Option<Vec2> {
		self.previous
	}
}
