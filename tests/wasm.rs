use airsketch::engine::{CanvasSurface, SketchEngine, Stroke, Surface, CANVAS_HEIGHT, CANVAS_WIDTH};
use airsketch::tracker::{parse_predictions, INDEX_FINGERTIP};
use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

fn create_canvas() -> web_sys::HtmlCanvasElement {
	let document = web_sys::window().unwrap().document().unwrap();
	let canvas = document
		.create_element("canvas")
		.unwrap()
		.dyn_into::<web_sys::HtmlCanvasElement>()
		.unwrap();
	canvas.set_width(CANVAS_WIDTH);
	canvas.set_height(CANVAS_HEIGHT);
	canvas
}

fn inked_pixels(canvas: &web_sys::HtmlCanvasElement) -> usize {
	let context = canvas
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into::<web_sys::CanvasRenderingContext2d>()
		.unwrap();
	let data = context
		.get_image_data(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64)
		.unwrap()
		.data();
	// Alpha channel of an initially blank canvas is all zero.
	data.chunks_exact(4).filter(|pixel| pixel[3] != 0).count()
}

#[wasm_bindgen_test]
fn segments_hit_the_canvas_and_clear_blanks_it() {
	let canvas = create_canvas();
	let surface = CanvasSurface::new(&canvas).unwrap();
	let mut engine = SketchEngine::new(surface);

	let stroke = Stroke::from_controls("#ff0000", 4.0);
	let mut surface = CanvasSurface::new(&canvas).unwrap();
	surface.draw_segment(Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0), &stroke);
	assert!(inked_pixels(&canvas) > 0);

	engine.clear();
	assert_eq!(inked_pixels(&canvas), 0);
}

#[wasm_bindgen_test]
fn predictions_parse_into_typed_hands() {
	let raw = js_sys::JSON::parse(
		r#"[{"landmarks": [
			[0,0,0],[1,1,0],[2,2,0],[3,3,0],[4,4,0],[5,5,0],[6,6,0],[7,7,0],
			[42,24,0],
			[9,9,0],[10,10,0],[11,11,0],[12,12,0],[13,13,0],[14,14,0],[15,15,0],
			[16,16,0],[17,17,0],[18,18,0],[19,19,0],[20,20,0]
		]}]"#,
	)
	.unwrap();

	let hands = parse_predictions(&raw);
	assert_eq!(hands.len(), 1);
	assert_eq!(hands[0].landmarks.len(), 21);
	assert_eq!(hands[0].landmarks[INDEX_FINGERTIP], Vec2::new(42.0, 24.0));
	assert_eq!(hands[0].fingertip(), Some(Vec2::new(42.0, 24.0)));
}

#[wasm_bindgen_test]
fn malformed_predictions_are_skipped() {
	let raw = js_sys::JSON::parse(r#"[{"landmarks": "nope"}, {}]"#).unwrap();
	assert!(parse_predictions(&raw).is_empty());

	let raw = js_sys::JSON::parse("{}").unwrap();
	assert!(parse_predictions(&raw).is_empty());
}
