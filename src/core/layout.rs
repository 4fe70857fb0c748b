use serde::{Deserialize, Serialize};

use crate::error::{VaseError, VaseResult};

/// Horizontal and baseline geometry for the vase row.
///
/// All glyphs share one bottom baseline and grow upward: a shape of height
/// `h` is drawn at `y = baseline_y - h`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaseLayout {
    /// Pixel y of the shared bottom baseline.
    pub baseline_y: f64,
    /// Width of every outline and fill rect.
    pub vase_width: f64,
    /// Left offset of the first glyph.
    pub margin: f64,
    /// Horizontal distance between consecutive glyph origins.
    pub padding: f64,
}

impl Default for VaseLayout {
    fn default() -> Self {
        Self {
            baseline_y: 300.0,
            vase_width: 15.0,
            margin: 230.0,
            padding: 60.0,
        }
    }
}

impl VaseLayout {
    pub fn validate(self) -> VaseResult<()> {
        for (field, value) in [
            ("baseline_y", self.baseline_y),
            ("vase_width", self.vase_width),
            ("margin", self.margin),
            ("padding", self.padding),
        ] {
            if !value.is_finite() {
                return Err(VaseError::InvalidData(format!(
                    "layout field `{field}` must be finite"
                )));
            }
        }
        if self.vase_width <= 0.0 {
            return Err(VaseError::InvalidData(
                "layout vase width must be > 0".to_owned(),
            ));
        }
        if self.baseline_y <= 0.0 {
            return Err(VaseError::InvalidData(
                "layout baseline must be > 0".to_owned(),
            ));
        }
        if self.margin < 0.0 || self.padding < 0.0 {
            return Err(VaseError::InvalidData(
                "layout margin and padding must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Pixel x of the glyph at sequence position `index`.
    #[must_use]
    pub fn x_offset(self, index: usize) -> f64 {
        index as f64 * self.padding + self.margin
    }

    /// Pixel y for a baseline-anchored shape of visual height `height`.
    #[must_use]
    pub fn shape_y(self, height: f64) -> f64 {
        self.baseline_y - height
    }
}
