pub mod bar_series;
pub mod data_point;
pub mod data_set;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod style;
pub mod types;
pub mod windowing;

pub use bar_series::{BarGeometry, project_bars, project_ranged_bars};
pub use data_point::{ChartDataPoint, DataPoint, DataPointId, RangedDataPoint};
pub use data_set::{
    BarDataSet, ChartDataSet, DataFunctions, DataSetId, LineDataSet, RangedBarDataSet,
    SeriesLayout,
};
pub use line_series::{
    LinePoint, LineSegment, curved_line_segments, line_segments, project_line_points,
};
pub use scale::{LinearScale, series_positions};
pub use style::{BarStyle, Color, LineStyle, LineType, PointShape, PointStyle, PointType};
pub use types::{Rect, Viewport};
pub use windowing::{WindowedChartData, content_width, x_axis_scale_factor};
