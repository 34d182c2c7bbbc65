use csscolorparser::Color;

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_WIDTH: f64 = 4.0;

/// Stroke parameters for a single segment. Sampled fresh from the UI controls
/// on every prediction tick, so a change applies from the next segment on.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
	pub color: Color,
	pub width: f64,
}

impl Default for Stroke {
	fn default() -> Self {
		Self {
			color: Color::new(0.0, 0.0, 0.0, 1.0),
			width: DEFAULT_WIDTH,
		}
	}
}

impl Stroke {
	/// Values come straight off the controls. A color input always emits
	/// `#rrggbb`, so the fallback only matters for programmatic writes.
	pub fn from_controls(color: &str, width: f64) -> Self {
		let color = match csscolorparser::parse(color) {
			Ok(color) => color,
			Err(error) => {
				tracing::warn!(%error, color, "unparseable stroke color, using black");
				Color::new(0.0, 0.0, 0.0, 1.0)
			}
		};
		Self { color, width }
	}

	pub fn css_color(&self) -> String {
		self.color.to_css_hex()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_picker_values() -> anyhow::Result<()> {
		let stroke = Stroke::from_controls("#ff8000", 7.0);
		assert_eq!(stroke.color, csscolorparser::parse("#ff8000")?);
		assert_eq!(stroke.width, 7.0);
		assert_eq!(stroke.css_color(), "#ff8000");
		Ok(())
	}

	#[test]
	fn bad_colors_fall_back_to_black() {
		let stroke = Stroke::from_controls("not-a-color", 2.0);
		assert_eq!(stroke.css_color(), "#000000");
		assert_eq!(stroke.width, 2.0);
	}

	#[test]
	fn default_matches_the_control_defaults() {
		assert_eq!(Stroke::default(), Stroke::from_controls(DEFAULT_COLOR, DEFAULT_WIDTH));
	}
}
