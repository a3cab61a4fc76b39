//! Chart data aggregates, chart views and the modifiers composed onto them.

mod chart_data;
mod chart_style;
mod chart_views;
mod observer;
mod x_axis_labels;

pub use chart_data::{
    BarChartData, ChartData, ChartViewData, LegendEntry, LineChartData, RangedBarChartData,
};
pub use chart_style::{ChartStyle, XAxisLabelPosition, XAxisLabelSource};
pub use chart_views::{BarChart, ChartView, LineChart, RangedBarChart};
pub use observer::{ChartDataEvent, ChartDataObserver, SubscriptionId};
pub use x_axis_labels::{
    XAxisLabels, XAxisLayout, XAxisSection, XAxisSections, plan_x_axis_layout,
};
