use serde::{Deserialize, Serialize};

use crate::core::{
    ChartDataSet, DataFunctions, LineDataSet, LinearScale, Rect, SeriesLayout, series_positions,
};
use crate::error::ChartResult;

/// Projected data point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// Position of the source point inside its data set.
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects a line data set into `bounds`.
///
/// Points are spread edge to edge by index. With `relative_x_axis` enabled and
/// every point dated, points are placed by date instead. Zero values are
/// dropped when the line style sets `ignore_zero`.
pub fn project_line_points(data_set: &LineDataSet, bounds: Rect) -> ChartResult<Vec<LinePoint>> {
    let points = data_set.data_points();
    let (Some(min), Some(max)) = (data_set.min_value(), data_set.max_value()) else {
        return Ok(Vec::new());
    };
    let y_scale = LinearScale::from_extent(min, max)?;

    let xs = match dated_positions(data_set, bounds)? {
        Some(xs) => xs,
        None => series_positions(points.len(), SeriesLayout::EdgeAligned, bounds.x, bounds.width),
    };

    let ignore_zero = data_set.style().ignore_zero;
    let mut projected = Vec::with_capacity(points.len());
    for (index, (point, x)) in points.iter().zip(xs).enumerate() {
        if ignore_zero && point.value() == 0.0 {
            continue;
        }
        let y = y_scale.domain_to_pixel_flipped(point.value(), bounds.y, bounds.height)?;
        projected.push(LinePoint { index, x, y });
    }

    Ok(projected)
}

fn dated_positions(data_set: &LineDataSet, bounds: Rect) -> ChartResult<Option<Vec<f64>>> {
    if !data_set.relative_x_axis() {
        return Ok(None);
    }
    let Some(times) = data_set
        .data_points()
        .iter()
        .map(|point| point.date_unix_seconds())
        .collect::<Option<Vec<f64>>>()
    else {
        return Ok(None);
    };
    if times.is_empty() {
        return Ok(None);
    }

    let min = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let x_scale = LinearScale::from_extent(min, max)?;

    let mut xs = Vec::with_capacity(times.len());
    for time in times {
        xs.push(x_scale.domain_to_pixel(time, bounds.x, bounds.width)?);
    }
    Ok(Some(xs))
}

/// Joins consecutive projected points into segments.
#[must_use]
pub fn line_segments(points: &[LinePoint]) -> Vec<LineSegment> {
    points
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect()
}

/// Smooths projected points with a Catmull-Rom spline sampled `steps` times
/// per span. The curve passes through every input point.
#[must_use]
pub fn curved_line_segments(points: &[LinePoint], steps: usize) -> Vec<LineSegment> {
    if points.len() < 3 || steps < 2 {
        return line_segments(points);
    }

    let at = |i: isize| {
        let clamped = i.clamp(0, points.len() as isize - 1) as usize;
        (points[clamped].x, points[clamped].y)
    };

    let mut segments = Vec::with_capacity((points.len() - 1) * steps);
    for span in 0..points.len() - 1 {
        let i = span as isize;
        let (p0, p1, p2, p3) = (at(i - 1), at(i), at(i + 1), at(i + 2));
        let mut previous = p1;
        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            let next = (
                catmull_rom(p0.0, p1.0, p2.0, p3.0, t),
                catmull_rom(p0.1, p1.1, p2.1, p3.1, t),
            );
            segments.push(LineSegment {
                x1: previous.0,
                y1: previous.1,
                x2: next.0,
                y2: next.1,
            });
            previous = next;
        }
    }
    segments
}

fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}
