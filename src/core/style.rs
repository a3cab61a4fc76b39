use serde::{Deserialize, Serialize};

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
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.56, 0.56, 0.58);
    pub const BLUE: Self = Self::rgb(0.0, 0.48, 1.0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointType {
    /// Filled marker with a contrasting border.
    #[default]
    FilledOutline,
    Outline,
    Filled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointShape {
    #[default]
    Circle,
    Square,
    RoundSquare,
}

/// Marker styling for line-chart data points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointStyle {
    pub point_size: f64,
    pub border_color: Color,
    pub fill_color: Color,
    pub line_width: f64,
    pub point_type: PointType,
    pub point_shape: PointShape,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            point_size: 9.0,
            border_color: Color::BLUE,
            fill_color: Color::WHITE,
            line_width: 3.0,
            point_type: PointType::default(),
            point_shape: PointShape::default(),
        }
    }
}

impl PointType {
    #[must_use]
    pub fn draws_fill(self) -> bool {
        matches!(self, Self::Filled | Self::FilledOutline)
    }

    #[must_use]
    pub fn draws_border(self) -> bool {
        matches!(self, Self::Outline | Self::FilledOutline)
    }
}

impl PointStyle {
    /// Checks only the parts the point type actually draws.
    pub fn validate(self) -> ChartResult<()> {
        if !self.point_size.is_finite() || self.point_size < 0.0 {
            return Err(ChartError::InvalidConfig(
                "point size must be finite and >= 0".to_owned(),
            ));
        }
        if self.point_type.draws_fill() {
            self.fill_color.validate()?;
        }
        if self.point_type.draws_border() {
            if !self.line_width.is_finite() || self.line_width <= 0.0 {
                return Err(ChartError::InvalidConfig(
                    "point border width must be finite and > 0".to_owned(),
                ));
            }
            self.border_color.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineType {
    #[default]
    CurvedLine,
    Line,
}

/// Stroke styling for a line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub line_color: Color,
    pub line_type: LineType,
    pub stroke_width: f64,
    /// Skip zero-valued points when drawing.
    pub ignore_zero: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_color: Color::BLACK,
            line_type: LineType::default(),
            stroke_width: 1.5,
            ignore_zero: false,
        }
    }
}

impl LineStyle {
    pub fn validate(self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.line_color.validate()
    }
}

/// Fill styling shared by bar and ranged-bar series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// Fraction of each slot the bar occupies, in `(0, 1]`.
    pub bar_width: f64,
    pub color: Color,
    pub corner_radius: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bar_width: 0.7,
            color: Color::BLUE,
            corner_radius: 5.0,
        }
    }
}

impl BarStyle {
    pub fn validate(self) -> ChartResult<()> {
        if !self.bar_width.is_finite() || self.bar_width <= 0.0 || self.bar_width > 1.0 {
            return Err(ChartError::InvalidConfig(
                "bar width must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidConfig(
                "bar corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
