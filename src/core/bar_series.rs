use serde::{Deserialize, Serialize};

use crate::core::{BarDataSet, ChartDataSet, DataFunctions, LinearScale, RangedBarDataSet, Rect};
use crate::error::ChartResult;

/// Deterministic bar geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub rect: Rect,
}

/// Left edge and width of bar `index` out of `count` equal slots.
fn bar_columns(index: usize, count: usize, bounds: Rect, bar_width: f64) -> (f64, f64) {
    let slot = bounds.width / count as f64;
    let width = slot * bar_width;
    (bounds.x + index as f64 * slot + (slot - width) * 0.5, width)
}

/// Projects bar values into `bounds`, growing each bar from the zero baseline.
pub fn project_bars(data_set: &BarDataSet, bounds: Rect) -> ChartResult<Vec<BarGeometry>> {
    let style = data_set.style();
    style.validate()?;
    let bar_width = style.bar_width;

    let points = data_set.data_points();
    let (Some(min), Some(max)) = (data_set.min_value(), data_set.max_value()) else {
        return Ok(Vec::new());
    };
    let y_scale = LinearScale::from_extent(min.min(0.0), max.max(0.0))?;

    let mut projected = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let (x, width) = bar_columns(index, points.len(), bounds, bar_width);
        let top =
            y_scale.domain_to_pixel_flipped(point.value().max(0.0), bounds.y, bounds.height)?;
        let bottom =
            y_scale.domain_to_pixel_flipped(point.value().min(0.0), bounds.y, bounds.height)?;
        projected.push(BarGeometry {
            index,
            rect: Rect::new(x, top, width, bottom - top),
        });
    }

    Ok(projected)
}

/// Projects ranged bars into `bounds`, each spanning its lower..upper bound.
pub fn project_ranged_bars(
    data_set: &RangedBarDataSet,
    bounds: Rect,
) -> ChartResult<Vec<BarGeometry>> {
    let style = data_set.style();
    style.validate()?;
    let bar_width = style.bar_width;

    let points = data_set.data_points();
    let (Some(min), Some(max)) = (data_set.min_value(), data_set.max_value()) else {
        return Ok(Vec::new());
    };
    let y_scale = LinearScale::from_extent(min, max)?;

    let mut projected = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let (x, width) = bar_columns(index, points.len(), bounds, bar_width);
        let top = y_scale.domain_to_pixel_flipped(point.upper_bound(), bounds.y, bounds.height)?;
        let bottom =
            y_scale.domain_to_pixel_flipped(point.lower_bound(), bounds.y, bounds.height)?;
        projected.push(BarGeometry {
            index,
            rect: Rect::new(x, top, width, bottom - top),
        });
    }

    Ok(projected)
}
