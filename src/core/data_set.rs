use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{
    BarStyle, ChartDataPoint, Color, DataPoint, LineStyle, PointStyle, RangedDataPoint,
};

/// Stable identity of one data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataSetId(Uuid);

impl DataSetId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DataSetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DataSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How x-axis labels line up with the plotted points of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesLayout {
    /// First and last points sit on the content edges.
    EdgeAligned,
    /// Each point is centered in an equal-width slot.
    Slotted,
}

/// Behavior shared by all data-set variants.
pub trait ChartDataSet {
    type Point: ChartDataPoint;

    fn id(&self) -> DataSetId;
    fn data_points(&self) -> &[Self::Point];
    fn legend_title(&self) -> &str;
    fn series_layout(&self) -> SeriesLayout;

    /// Swatch color shown next to the legend title.
    fn legend_color(&self) -> Color;

    /// Number of points visible at once before horizontal scrolling.
    ///
    /// Only data sets that support windowing return a value.
    fn view_window(&self) -> Option<i64> {
        None
    }

    fn len(&self) -> usize {
        self.data_points().len()
    }

    fn is_empty(&self) -> bool {
        self.data_points().is_empty()
    }

    fn point_labels(&self) -> Vec<Option<&str>> {
        self.data_points().iter().map(|point| point.label()).collect()
    }

    /// Compares everything except identity.
    fn content_eq(&self, other: &Self) -> bool;
}

/// Summary statistics over a data set's values.
///
/// Every method returns `None` for an empty set.
pub trait DataFunctions {
    fn max_value(&self) -> Option<f64>;
    fn min_value(&self) -> Option<f64>;
    fn average(&self) -> Option<f64>;

    fn range(&self) -> Option<f64> {
        Some(self.max_value()? - self.min_value()?)
    }
}

fn max_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.map(OrderedFloat).max().map(OrderedFloat::into_inner)
}

fn min_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.map(OrderedFloat).min().map(OrderedFloat::into_inner)
}

fn mean_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

fn points_content_eq<P>(left: &[P], right: &[P], eq: impl Fn(&P, &P) -> bool) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| eq(a, b))
}

/// Data set for a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDataSet {
    id: DataSetId,
    data_points: Vec<DataPoint>,
    legend_title: String,
    point_style: PointStyle,
    style: LineStyle,
    relative_x_axis: bool,
}

impl LineDataSet {
    #[must_use]
    pub fn new(data_points: Vec<DataPoint>) -> Self {
        Self {
            id: DataSetId::new(),
            data_points,
            legend_title: String::new(),
            point_style: PointStyle::default(),
            style: LineStyle::default(),
            relative_x_axis: false,
        }
    }

    #[must_use]
    pub fn with_legend_title(mut self, legend_title: impl Into<String>) -> Self {
        self.legend_title = legend_title.into();
        self
    }

    #[must_use]
    pub fn with_point_style(mut self, point_style: PointStyle) -> Self {
        self.point_style = point_style;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Places points along the x axis by their dates instead of by index.
    #[must_use]
    pub fn with_relative_x_axis(mut self, relative_x_axis: bool) -> Self {
        self.relative_x_axis = relative_x_axis;
        self
    }

    #[must_use]
    pub fn point_style(&self) -> PointStyle {
        self.point_style
    }

    #[must_use]
    pub fn style(&self) -> LineStyle {
        self.style
    }

    #[must_use]
    pub fn relative_x_axis(&self) -> bool {
        self.relative_x_axis
    }
}

impl ChartDataSet for LineDataSet {
    type Point = DataPoint;

    fn id(&self) -> DataSetId {
        self.id
    }

    fn data_points(&self) -> &[DataPoint] {
        &self.data_points
    }

    fn legend_title(&self) -> &str {
        &self.legend_title
    }

    fn series_layout(&self) -> SeriesLayout {
        SeriesLayout::EdgeAligned
    }

    fn legend_color(&self) -> Color {
        self.style.line_color
    }

    fn content_eq(&self, other: &Self) -> bool {
        self.legend_title == other.legend_title
            && self.point_style == other.point_style
            && self.style == other.style
            && self.relative_x_axis == other.relative_x_axis
            && points_content_eq(&self.data_points, &other.data_points, DataPoint::content_eq)
    }
}

impl DataFunctions for LineDataSet {
    fn max_value(&self) -> Option<f64> {
        max_of(self.data_points.iter().map(DataPoint::value))
    }

    fn min_value(&self) -> Option<f64> {
        min_of(self.data_points.iter().map(DataPoint::value))
    }

    fn average(&self) -> Option<f64> {
        mean_of(self.data_points.iter().map(DataPoint::value))
    }
}

/// Data set for a standard bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDataSet {
    id: DataSetId,
    data_points: Vec<DataPoint>,
    legend_title: String,
    style: BarStyle,
}

impl BarDataSet {
    #[must_use]
    pub fn new(data_points: Vec<DataPoint>) -> Self {
        Self {
            id: DataSetId::new(),
            data_points,
            legend_title: String::new(),
            style: BarStyle::default(),
        }
    }

    #[must_use]
    pub fn with_legend_title(mut self, legend_title: impl Into<String>) -> Self {
        self.legend_title = legend_title.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn style(&self) -> BarStyle {
        self.style
    }
}

impl ChartDataSet for BarDataSet {
    type Point = DataPoint;

    fn id(&self) -> DataSetId {
        self.id
    }

    fn data_points(&self) -> &[DataPoint] {
        &self.data_points
    }

    fn legend_title(&self) -> &str {
        &self.legend_title
    }

    fn series_layout(&self) -> SeriesLayout {
        SeriesLayout::Slotted
    }

    fn legend_color(&self) -> Color {
        self.style.color
    }

    fn content_eq(&self, other: &Self) -> bool {
        self.legend_title == other.legend_title
            && self.style == other.style
            && points_content_eq(&self.data_points, &other.data_points, DataPoint::content_eq)
    }
}

impl DataFunctions for BarDataSet {
    fn max_value(&self) -> Option<f64> {
        max_of(self.data_points.iter().map(DataPoint::value))
    }

    fn min_value(&self) -> Option<f64> {
        min_of(self.data_points.iter().map(DataPoint::value))
    }

    fn average(&self) -> Option<f64> {
        mean_of(self.data_points.iter().map(DataPoint::value))
    }
}

/// Data set for ranged bar charts.
///
/// `view_window` is stored as given; non-positive windows simply disable
/// horizontal windowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangedBarDataSet {
    id: DataSetId,
    data_points: Vec<RangedDataPoint>,
    legend_title: String,
    style: BarStyle,
    view_window: Option<i64>,
}

impl RangedBarDataSet {
    #[must_use]
    pub fn new(data_points: Vec<RangedDataPoint>) -> Self {
        Self {
            id: DataSetId::new(),
            data_points,
            legend_title: String::new(),
            style: BarStyle::default(),
            view_window: None,
        }
    }

    #[must_use]
    pub fn with_legend_title(mut self, legend_title: impl Into<String>) -> Self {
        self.legend_title = legend_title.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_view_window(mut self, view_window: i64) -> Self {
        self.view_window = Some(view_window);
        self
    }

    #[must_use]
    pub fn style(&self) -> BarStyle {
        self.style
    }
}

impl ChartDataSet for RangedBarDataSet {
    type Point = RangedDataPoint;

    fn id(&self) -> DataSetId {
        self.id
    }

    fn data_points(&self) -> &[RangedDataPoint] {
        &self.data_points
    }

    fn legend_title(&self) -> &str {
        &self.legend_title
    }

    fn series_layout(&self) -> SeriesLayout {
        SeriesLayout::Slotted
    }

    fn legend_color(&self) -> Color {
        self.style.color
    }

    fn view_window(&self) -> Option<i64> {
        self.view_window
    }

    fn content_eq(&self, other: &Self) -> bool {
        self.legend_title == other.legend_title
            && self.style == other.style
            && self.view_window == other.view_window
            && points_content_eq(
                &self.data_points,
                &other.data_points,
                RangedDataPoint::content_eq,
            )
    }
}

impl DataFunctions for RangedBarDataSet {
    fn max_value(&self) -> Option<f64> {
        max_of(self.data_points.iter().map(RangedDataPoint::upper_bound))
    }

    fn min_value(&self) -> Option<f64> {
        min_of(self.data_points.iter().map(RangedDataPoint::lower_bound))
    }

    fn average(&self) -> Option<f64> {
        mean_of(self.data_points.iter().map(RangedDataPoint::mid_point))
    }
}

#[cfg(test)]
mod tests {
    use super::{max_of, mean_of, min_of};

    #[test]
    fn statistics_helpers_return_none_for_empty_input() {
        assert_eq!(max_of(std::iter::empty()), None);
        assert_eq!(min_of(std::iter::empty()), None);
        assert_eq!(mean_of(std::iter::empty()), None);
    }

    #[test]
    fn statistics_helpers_handle_negative_values() {
        let values = [-3.0, 4.5, -10.0, 0.0];
        assert_eq!(max_of(values.into_iter()), Some(4.5));
        assert_eq!(min_of(values.into_iter()), Some(-10.0));
        assert_eq!(mean_of(values.into_iter()), Some(-2.125));
    }
}
