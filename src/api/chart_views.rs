use crate::core::{
    BarGeometry, BarStyle, LineType, PointShape, PointStyle, PointType, Rect, curved_line_segments,
    line_segments, project_bars, project_line_points, project_ranged_bars,
};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame};

use super::{BarChartData, LineChartData, RangedBarChartData};

/// Samples per span when smoothing curved lines.
const CURVE_STEPS: usize = 8;

/// Anything that can draw itself into a rectangle of a frame.
pub trait ChartView {
    fn draw(&self, bounds: Rect, frame: &mut RenderFrame) -> ChartResult<()>;
}

/// Line and point markers of a line chart's data set.
#[derive(Debug, Clone, Copy)]
pub struct LineChart<'a> {
    chart_data: &'a LineChartData,
}

impl<'a> LineChart<'a> {
    #[must_use]
    pub fn new(chart_data: &'a LineChartData) -> Self {
        Self { chart_data }
    }
}

impl ChartView for LineChart<'_> {
    fn draw(&self, bounds: Rect, frame: &mut RenderFrame) -> ChartResult<()> {
        let data_set = self.chart_data.data_sets();
        let style = data_set.style();
        style.validate()?;
        let point_style = data_set.point_style();
        point_style.validate()?;

        let points = project_line_points(data_set, bounds)?;
        let segments = match style.line_type {
            LineType::CurvedLine => curved_line_segments(&points, CURVE_STEPS),
            LineType::Line => line_segments(&points),
        };
        for segment in segments {
            frame.push_line(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                style.stroke_width,
                style.line_color,
            ));
        }

        for point in &points {
            frame.push_rect(point_marker(point.x, point.y, point_style));
        }
        Ok(())
    }
}

fn point_marker(center_x: f64, center_y: f64, style: PointStyle) -> RectPrimitive {
    let size = style.point_size;
    let corner_radius = match style.point_shape {
        PointShape::Circle => size * 0.5,
        PointShape::Square => 0.0,
        PointShape::RoundSquare => size * 0.25,
    };
    let marker = RectPrimitive::filled(
        center_x - size * 0.5,
        center_y - size * 0.5,
        size,
        size,
        style.fill_color,
    )
    .with_corner_radius(corner_radius);

    match style.point_type {
        PointType::Filled => marker,
        PointType::Outline => marker
            .without_fill()
            .with_border(style.border_color, style.line_width),
        PointType::FilledOutline => marker.with_border(style.border_color, style.line_width),
    }
}

fn push_bars(frame: &mut RenderFrame, bars: Vec<BarGeometry>, style: BarStyle) {
    for bar in bars {
        let radius = style.corner_radius.min(bar.rect.width * 0.5);
        frame.push_rect(
            RectPrimitive::filled(
                bar.rect.x,
                bar.rect.y,
                bar.rect.width,
                bar.rect.height,
                style.color,
            )
            .with_corner_radius(radius),
        );
    }
}

/// Bars growing from the zero baseline.
#[derive(Debug, Clone, Copy)]
pub struct BarChart<'a> {
    chart_data: &'a BarChartData,
}

impl<'a> BarChart<'a> {
    #[must_use]
    pub fn new(chart_data: &'a BarChartData) -> Self {
        Self { chart_data }
    }
}

impl ChartView for BarChart<'_> {
    fn draw(&self, bounds: Rect, frame: &mut RenderFrame) -> ChartResult<()> {
        let data_set = self.chart_data.data_sets();
        let style = data_set.style();
        style.validate()?;
        push_bars(frame, project_bars(data_set, bounds)?, style);
        Ok(())
    }
}

/// Bars spanning each point's lower..upper range.
#[derive(Debug, Clone, Copy)]
pub struct RangedBarChart<'a> {
    chart_data: &'a RangedBarChartData,
}

impl<'a> RangedBarChart<'a> {
    #[must_use]
    pub fn new(chart_data: &'a RangedBarChartData) -> Self {
        Self { chart_data }
    }
}

impl ChartView for RangedBarChart<'_> {
    fn draw(&self, bounds: Rect, frame: &mut RenderFrame) -> ChartResult<()> {
        let data_set = self.chart_data.data_sets();
        let style = data_set.style();
        style.validate()?;
        push_bars(frame, project_ranged_bars(data_set, bounds)?, style);
        Ok(())
    }
}
