use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    BarDataSet, ChartDataSet, Color, DataSetId, LineDataSet, RangedBarDataSet, WindowedChartData,
};

use super::observer::ObserverRegistry;
use super::{
    ChartDataEvent, ChartDataObserver, ChartStyle, SubscriptionId, XAxisLabelPosition,
    XAxisLabelSource,
};

/// View-state flags that modifiers raise so the chart knows what surrounds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartViewData {
    pub has_x_axis_labels: bool,
    pub has_legend: bool,
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub data_set_id: DataSetId,
    pub legend: String,
    pub color: Color,
}

/// Aggregate handed to chart views and modifiers.
///
/// Owns the primary data set exclusively. Every mutation notifies the
/// subscribed observers in subscription order.
pub struct ChartData<D> {
    data_sets: D,
    chart_style: ChartStyle,
    x_axis_labels: Option<Vec<String>>,
    view_data: ChartViewData,
    observers: ObserverRegistry,
    x_axis_label_subscriptions: IndexSet<SubscriptionId>,
}

pub type LineChartData = ChartData<LineDataSet>;
pub type BarChartData = ChartData<BarDataSet>;
pub type RangedBarChartData = ChartData<RangedBarDataSet>;

impl<D: ChartDataSet> ChartData<D> {
    #[must_use]
    pub fn new(data_sets: D, chart_style: ChartStyle) -> Self {
        Self {
            data_sets,
            chart_style,
            x_axis_labels: None,
            view_data: ChartViewData::default(),
            observers: ObserverRegistry::default(),
            x_axis_label_subscriptions: IndexSet::new(),
        }
    }

    /// Chart-level x-axis labels, used with `XAxisLabelSource::ChartData`.
    #[must_use]
    pub fn with_x_axis_labels(mut self, labels: Vec<String>) -> Self {
        self.x_axis_labels = Some(labels);
        self
    }

    #[must_use]
    pub fn data_sets(&self) -> &D {
        &self.data_sets
    }

    #[must_use]
    pub fn chart_style(&self) -> &ChartStyle {
        &self.chart_style
    }

    #[must_use]
    pub fn view_data(&self) -> ChartViewData {
        self.view_data
    }

    pub fn set_data_sets(&mut self, data_sets: D) {
        let points_len = data_sets.len();
        debug!(
            previous_count = self.data_sets.len(),
            points_len, "replace chart data sets"
        );
        self.data_sets = data_sets;
        self.observers
            .notify(ChartDataEvent::DataSetsReplaced { points_len });
    }

    pub fn set_chart_style(&mut self, chart_style: ChartStyle) {
        self.chart_style = chart_style;
        self.observers.notify(ChartDataEvent::StyleChanged);
    }

    pub fn set_x_axis_label_position(&mut self, position: XAxisLabelPosition) {
        if self.chart_style.x_axis_label_position == position {
            return;
        }
        self.chart_style.x_axis_label_position = position;
        self.observers.notify(ChartDataEvent::StyleChanged);
    }

    pub fn set_x_axis_labels(&mut self, labels: Option<Vec<String>>) {
        let count = labels.as_ref().map_or(0, Vec::len);
        self.x_axis_labels = labels;
        self.observers
            .notify(ChartDataEvent::XAxisLabelsChanged { count });
    }

    pub fn set_has_x_axis_labels(&mut self, has_x_axis_labels: bool) {
        if self.view_data.has_x_axis_labels == has_x_axis_labels {
            return;
        }
        self.view_data.has_x_axis_labels = has_x_axis_labels;
        self.observers.notify(ChartDataEvent::ViewDataChanged);
    }

    pub fn set_has_legend(&mut self, has_legend: bool) {
        if self.view_data.has_legend == has_legend {
            return;
        }
        self.view_data.has_legend = has_legend;
        self.observers.notify(ChartDataEvent::ViewDataChanged);
    }

    /// Whether the primary data set has enough points to warrant axis labels.
    #[must_use]
    pub fn is_greater_than_two(&self) -> bool {
        self.data_sets.len() > 2
    }

    /// Label text for the x axis, resolved from the configured source.
    ///
    /// Data points without a label yield an empty string so positions keep
    /// lining up with the plotted points.
    #[must_use]
    pub fn x_axis_labels(&self) -> Vec<String> {
        match self.chart_style.x_axis_labels_from {
            XAxisLabelSource::DataPoint => self
                .data_sets
                .point_labels()
                .into_iter()
                .map(|label| label.unwrap_or_default().to_owned())
                .collect(),
            XAxisLabelSource::ChartData => self.x_axis_labels.clone().unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn x_axis_title(&self) -> Option<&str> {
        self.chart_style.x_axis_title.as_deref()
    }

    #[must_use]
    pub fn legends(&self) -> Vec<LegendEntry> {
        vec![LegendEntry {
            data_set_id: self.data_sets.id(),
            legend: self.data_sets.legend_title().to_owned(),
            color: self.data_sets.legend_color(),
        }]
    }

    pub fn subscribe(&mut self, observer: Box<dyn ChartDataObserver>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Returns `true` when the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.observers.contains(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Subscribes an x-axis label modifier and raises the label flag.
    pub(crate) fn attach_x_axis_labels(
        &mut self,
        observer: Box<dyn ChartDataObserver>,
    ) -> SubscriptionId {
        self.set_has_x_axis_labels(true);
        let id = self.observers.subscribe(observer);
        self.retain_live_x_axis_labels();
        self.x_axis_label_subscriptions.insert(id);
        id
    }

    /// Unsubscribes an x-axis label modifier. The label flag is cleared once
    /// no live label modifier remains.
    pub(crate) fn detach_x_axis_labels(&mut self, id: SubscriptionId) {
        self.observers.unsubscribe(id);
        self.x_axis_label_subscriptions.shift_remove(&id);
        self.observers.prune();
        self.retain_live_x_axis_labels();
        if self.x_axis_label_subscriptions.is_empty() {
            self.set_has_x_axis_labels(false);
        }
    }

    fn retain_live_x_axis_labels(&mut self) {
        let observers = &self.observers;
        self.x_axis_label_subscriptions
            .retain(|id| observers.contains(*id));
    }
}

impl<D: ChartDataSet> WindowedChartData for ChartData<D> {
    fn window_size(&self) -> Option<i64> {
        self.data_sets.view_window()
    }

    fn total_points(&self) -> usize {
        self.data_sets.len()
    }
}

impl<D: fmt::Debug> fmt::Debug for ChartData<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartData")
            .field("data_sets", &self.data_sets)
            .field("chart_style", &self.chart_style)
            .field("x_axis_labels", &self.x_axis_labels)
            .field("view_data", &self.view_data)
            .field("subscribers", &self.observers.len())
            .field("x_axis_label_modifiers", &self.x_axis_label_subscriptions.len())
            .finish()
    }
}
