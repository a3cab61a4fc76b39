use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{ChartError, ChartResult};

/// Side of the chart that carries the x-axis labels and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum XAxisLabelPosition {
    #[default]
    Bottom,
    Top,
}

/// Where x-axis label text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum XAxisLabelSource {
    /// One label per data point, taken from the point's own label.
    #[default]
    DataPoint,
    /// The chart-level label list set on `ChartData`.
    ChartData,
}

/// Global presentation settings of a chart.
///
/// Every field has a default so partial JSON documents load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub x_axis_label_position: XAxisLabelPosition,
    pub x_axis_labels_from: XAxisLabelSource,
    pub x_axis_label_color: Color,
    pub x_axis_label_font_size_px: f64,
    pub x_axis_label_row_height_px: f64,
    pub x_axis_title: Option<String>,
    pub x_axis_title_color: Color,
    pub x_axis_title_font_size_px: f64,
    pub x_axis_title_height_px: f64,
    /// Gap between the chart content and the label row.
    pub x_axis_label_padding_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            x_axis_label_position: XAxisLabelPosition::default(),
            x_axis_labels_from: XAxisLabelSource::default(),
            x_axis_label_color: Color::BLACK,
            x_axis_label_font_size_px: 10.0,
            x_axis_label_row_height_px: 20.0,
            x_axis_title: None,
            x_axis_title_color: Color::BLACK,
            x_axis_title_font_size_px: 12.0,
            x_axis_title_height_px: 18.0,
            x_axis_label_padding_px: 2.0,
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn with_x_axis_label_position(mut self, position: XAxisLabelPosition) -> Self {
        self.x_axis_label_position = position;
        self
    }

    #[must_use]
    pub fn with_x_axis_labels_from(mut self, source: XAxisLabelSource) -> Self {
        self.x_axis_labels_from = source;
        self
    }

    #[must_use]
    pub fn with_x_axis_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis_title = Some(title.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("x_axis_label_font_size_px", self.x_axis_label_font_size_px),
            ("x_axis_title_font_size_px", self.x_axis_title_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("x_axis_label_row_height_px", self.x_axis_label_row_height_px),
            ("x_axis_title_height_px", self.x_axis_title_height_px),
            ("x_axis_label_padding_px", self.x_axis_label_padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        self.x_axis_label_color.validate()?;
        self.x_axis_title_color.validate()
    }

    /// Parses and validates a style document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let style: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart style: {e}")))?;
        style.validate()?;
        Ok(style)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart style: {e}"))
        })
    }
}
