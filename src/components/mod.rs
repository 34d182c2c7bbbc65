pub mod fallback;

mod panel;
pub use panel::*;

mod sketch_board;
pub use sketch_board::*;

mod stroke_settings;
pub use stroke_settings::*;
