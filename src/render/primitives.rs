use serde::{Deserialize, Serialize};

use crate::error::{VaseError, VaseResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from 8-bit channels, for hex-style palettes.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    pub fn validate(self) -> VaseResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(VaseError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one axis-aligned rectangle in pixel space.
///
/// Fill and stroke are independent paint sources: an outline rect carries
/// only a stroke, a liquid rect carries both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
}

impl RectPrimitive {
    /// Stroke-only rect (`fill: none`).
    #[must_use]
    pub const fn outlined(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke_color: Color,
        stroke_width: f64,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color: None,
            stroke_color: Some(stroke_color),
            stroke_width,
        }
    }

    /// Rect painted and stroked in the same color.
    #[must_use]
    pub const fn filled(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        stroke_width: f64,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color: Some(color),
            stroke_color: Some(color),
            stroke_width,
        }
    }

    pub fn validate(self) -> VaseResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(VaseError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(VaseError::InvalidData(
                "rect width and height must be >= 0".to_owned(),
            ));
        }
        if self.fill_color.is_none() && self.stroke_color.is_none() {
            return Err(VaseError::InvalidData(
                "rect must carry a fill or a stroke".to_owned(),
            ));
        }
        if let Some(color) = self.fill_color {
            color.validate()?;
        }
        if let Some(color) = self.stroke_color {
            color.validate()?;
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(VaseError::InvalidData(
                    "rect stroke width must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
