use serde::{Deserialize, Serialize};

use crate::core::Trend;
use crate::error::{ChartError, ChartResult};

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

    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// `#rrggbb` form, alpha ignored.
    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke colors for the two trend classes plus the area-fill opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPalette {
    pub positive: Color,
    pub negative: Color,
    pub fill_alpha: f64,
}

impl Default for TrendPalette {
    fn default() -> Self {
        Self {
            // emerald-500 / red-500
            positive: Color::rgb8(16, 185, 129),
            negative: Color::rgb8(239, 68, 68),
            fill_alpha: 0.15,
        }
    }
}

impl TrendPalette {
    #[must_use]
    pub fn stroke(self, trend: Trend) -> Color {
        match trend {
            Trend::Positive => self.positive,
            Trend::Negative => self.negative,
        }
    }

    #[must_use]
    pub fn fill(self, trend: Trend) -> Color {
        self.stroke(trend).with_alpha(self.fill_alpha)
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.positive.validate()?;
        self.negative.validate()?;
        if !self.fill_alpha.is_finite() || !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(ChartError::InvalidConfig(
                "palette fill alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Draw command for one line segment in surface space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, TrendPalette};
    use crate::core::Trend;

    #[test]
    fn default_palette_hex_tokens() {
        let palette = TrendPalette::default();
        assert_eq!(palette.stroke(Trend::Positive).to_hex(), "#10b981");
        assert_eq!(palette.stroke(Trend::Negative).to_hex(), "#ef4444");
        assert_eq!(palette.fill(Trend::Negative).alpha, 0.15);
    }

    #[test]
    fn palette_rejects_out_of_range_channels() {
        let palette = TrendPalette {
            positive: Color::rgb(1.2, 0.0, 0.0),
            ..TrendPalette::default()
        };
        assert!(palette.validate().is_err());

        let palette = TrendPalette {
            fill_alpha: -0.1,
            ..TrendPalette::default()
        };
        assert!(palette.validate().is_err());
    }
}
