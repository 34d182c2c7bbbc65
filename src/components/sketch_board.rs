use crate::camera::{self, CameraError};
use crate::components::fallback;
use crate::engine::{CanvasError, CanvasSurface, SketchEngine, Stroke, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::speech::{Command, SpeechError, VoiceListener};
use crate::tracker::{HandTracker, TrackerError};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, thiserror::Error)]
pub enum InitError {
	#[error(transparent)]
	Canvas(#[from] CanvasError),

	#[error(transparent)]
	Camera(#[from] CameraError),

	#[error(transparent)]
	Tracker(#[from] TrackerError),
}

static_assertions::assert_impl_all!(InitError: std::error::Error, Send, Sync);

#[derive(Clone, Debug)]
enum BoardStatus {
	Initializing,
	Ready,
	Failed(InitError),
}

/// The video feed with the drawing canvas on top, plus the one-shot
/// initialization that wires camera, hand tracker, and voice commands
/// together. Initialization runs in strict order: canvas context, then
/// camera, then model, then the independent voice listener last.
#[component]
pub fn SketchBoard(#[prop(into)] stroke: Signal<Stroke>) -> impl IntoView {
	let video_ref = NodeRef::<leptos::html::Video>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (status, set_status) = signal(BoardStatus::Initializing);
	let started = StoredValue::new(false);

	Effect::new(move |_| {
		let (Some(video), Some(canvas)) = (video_ref.get(), canvas_ref.get()) else {
			return;
		};
		// Both elements fire the effect once each; init must run once.
		if started.get_value() {
			return;
		}
		started.set_value(true);

		leptos::task::spawn_local(async move {
			match init_board(video, canvas, stroke).await {
				Ok(()) => set_status.set(BoardStatus::Ready),
				Err(error) => {
					tracing::error!(%error, "sketch board initialization failed");
					set_status.set(BoardStatus::Failed(error));
				}
			}
		});
	});

	let width = CANVAS_WIDTH.to_string();
	let height = CANVAS_HEIGHT.to_string();
	view! {
		<div class="SketchBoard">
			<video
				class="VideoFeed"
				node_ref=video_ref
				autoplay=true
				playsinline=true
				width=width.clone()
				height=height.clone()
			></video>
			<canvas class="SketchCanvas" node_ref=canvas_ref width=width height=height></canvas>
			{move || match status.get() {
				BoardStatus::Initializing => view! { <fallback::Initializing/> }.into_any(),
				BoardStatus::Ready => ().into_any(),
				BoardStatus::Failed(error) => {
					view! { <fallback::InitFailed message=error.to_string()/> }.into_any()
				}
			}}
		</div>
	}
}

async fn init_board(
	video: web_sys::HtmlVideoElement,
	canvas: web_sys::HtmlCanvasElement,
	stroke: Signal<Stroke>,
) -> Result<(), InitError> {
	let surface = CanvasSurface::new(&canvas)?;
	let _stream = camera::acquire_camera(&video).await?;
	let tracker = HandTracker::load(&video).await?;

	let engine = Rc::new(RefCell::new(SketchEngine::new(surface)));

	{
		let engine = engine.clone();
		tracker.on_predict(move |hands| {
			// Sampled at tick time, never cached across ticks.
			let stroke = stroke.get_untracked();
			engine.borrow_mut().handle_frame(&hands, &stroke);
		})?;
	}
	tracker.forget();

	// Voice control is optional; without it the rest of the board works.
	match VoiceListener::start({
		let engine = engine.clone();
		move |command| match command {
			Command::Clear => engine.borrow_mut().clear(),
		}
	}) {
		Ok(listener) => listener.forget(),
		Err(SpeechError::Unsupported) => {
			tracing::warn!("speech recognition unsupported; voice commands disabled");
		}
		Err(error) => {
			tracing::warn!(%error, "voice commands disabled");
		}
	}

	Ok(())
}
