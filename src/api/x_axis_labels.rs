use std::cell::Cell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};

use crate::core::{
    ChartDataSet, Rect, Viewport, WindowedChartData, content_width, series_positions,
};
use crate::error::ChartResult;
use crate::interaction::DragPanState;
use crate::render::{RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::{
    ChartData, ChartDataEvent, ChartDataObserver, ChartView, SubscriptionId, XAxisLabelPosition,
};

/// One vertically stacked block of a chart decorated with x-axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XAxisSection {
    Content,
    Labels,
    Title,
}

pub type XAxisSections = SmallVec<[XAxisSection; 3]>;

/// Top-to-bottom section order for a label position.
///
/// Charts with two points or fewer render their content only.
#[must_use]
pub fn plan_x_axis_layout(position: XAxisLabelPosition, greater_than_two: bool) -> XAxisSections {
    match (position, greater_than_two) {
        (_, false) => smallvec![XAxisSection::Content],
        (XAxisLabelPosition::Bottom, true) => smallvec![
            XAxisSection::Content,
            XAxisSection::Labels,
            XAxisSection::Title
        ],
        (XAxisLabelPosition::Top, true) => smallvec![
            XAxisSection::Title,
            XAxisSection::Labels,
            XAxisSection::Content
        ],
    }
}

/// Resolved pixel placement of every section for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct XAxisLayout {
    pub sections: SmallVec<[(XAxisSection, Rect); 3]>,
    pub scale_factor: f64,
    pub content_width: f64,
    pub offset_x: f64,
}

impl XAxisLayout {
    #[must_use]
    pub fn section(&self, section: XAxisSection) -> Option<Rect> {
        self.sections
            .iter()
            .find(|(kind, _)| *kind == section)
            .map(|(_, rect)| *rect)
    }

    #[must_use]
    pub fn order(&self) -> XAxisSections {
        self.sections.iter().map(|(kind, _)| *kind).collect()
    }
}

/// Marks its modifier for re-render; dead once the modifier is dropped.
struct PendingRenderListener {
    pending: Weak<Cell<bool>>,
}

impl ChartDataObserver for PendingRenderListener {
    fn on_change(&mut self, _event: ChartDataEvent) {
        if let Some(pending) = self.pending.upgrade() {
            pending.set(true);
        }
    }

    fn is_alive(&self) -> bool {
        self.pending.strong_count() > 0
    }
}

/// Modifier that stacks an x-axis label row and title around chart content.
///
/// Attaching flags the chart data as carrying x-axis labels and subscribes to
/// its changes; [`Self::needs_render`] reports whether a change arrived since
/// the last [`Self::render`]. Horizontal panning uses [`DragPanState`].
#[derive(Debug)]
pub struct XAxisLabels {
    subscription: SubscriptionId,
    pan: DragPanState,
    pending: Rc<Cell<bool>>,
}

impl XAxisLabels {
    /// Dropping the modifier without [`Self::detach`] leaves a dead listener
    /// that the chart data prunes on its next notification.
    pub fn attach<D: ChartDataSet>(chart_data: &mut ChartData<D>) -> Self {
        let pending = Rc::new(Cell::new(true));
        let listener = PendingRenderListener {
            pending: Rc::downgrade(&pending),
        };
        let subscription = chart_data.attach_x_axis_labels(Box::new(listener));
        debug!(%subscription, "x-axis labels attached");

        Self {
            subscription,
            pan: DragPanState::default(),
            pending,
        }
    }

    /// Unsubscribes and clears the chart's x-axis label flag unless another
    /// label modifier is still attached.
    pub fn detach<D: ChartDataSet>(self, chart_data: &mut ChartData<D>) {
        chart_data.detach_x_axis_labels(self.subscription);
        debug!(subscription = %self.subscription, "x-axis labels detached");
    }

    #[must_use]
    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.pending.get()
    }

    #[must_use]
    pub fn pan(&self) -> DragPanState {
        self.pan
    }

    pub fn drag_changed(&mut self, translation_x: f64) -> ChartResult<()> {
        self.pan.on_drag_changed(translation_x)?;
        self.pending.set(true);
        Ok(())
    }

    pub fn drag_ended(&mut self, translation_x: f64) -> ChartResult<()> {
        self.pan.on_drag_ended(translation_x)?;
        self.pending.set(true);
        Ok(())
    }

    pub fn drag_cancelled(&mut self) {
        self.pan.on_drag_cancelled();
        self.pending.set(true);
    }

    /// Places content, label row and title inside `viewport`.
    ///
    /// All sections share the scaled content width and the current pan
    /// offset. The title section collapses to zero height without a title.
    pub fn layout<D: ChartDataSet>(
        &self,
        chart_data: &ChartData<D>,
        viewport: Viewport,
    ) -> ChartResult<XAxisLayout> {
        viewport.ensure_valid()?;

        let style = chart_data.chart_style();
        let position = style.x_axis_label_position;
        let order = plan_x_axis_layout(position, chart_data.is_greater_than_two());

        let scale_factor = chart_data.x_axis_scale_factor();
        let width = content_width(f64::from(viewport.width), scale_factor);
        let offset_x = self.pan.offset();

        let labels_height = style.x_axis_label_row_height_px;
        let title_height = if chart_data.x_axis_title().is_some() {
            style.x_axis_title_height_px
        } else {
            0.0
        };
        let padding = style.x_axis_label_padding_px;
        let decorated = order.len() > 1;
        let content_height = if decorated {
            (f64::from(viewport.height) - labels_height - title_height - padding).max(0.0)
        } else {
            f64::from(viewport.height)
        };

        let mut sections = SmallVec::new();
        let mut y = 0.0;
        for section in order {
            let height = match section {
                XAxisSection::Content => content_height,
                XAxisSection::Labels => labels_height,
                XAxisSection::Title => title_height,
            };
            if section == XAxisSection::Labels && position == XAxisLabelPosition::Bottom {
                y += padding;
            }
            sections.push((section, Rect::new(offset_x, y, width, height)));
            y += height;
            if section == XAxisSection::Labels && position == XAxisLabelPosition::Top {
                y += padding;
            }
        }

        Ok(XAxisLayout {
            sections,
            scale_factor,
            content_width: width,
            offset_x,
        })
    }

    /// Draws `content` decorated with the x-axis label row and title.
    pub fn render<D, V>(
        &mut self,
        content: &V,
        chart_data: &ChartData<D>,
        viewport: Viewport,
    ) -> ChartResult<RenderFrame>
    where
        D: ChartDataSet,
        V: ChartView + ?Sized,
    {
        let layout = self.layout(chart_data, viewport)?;
        let style = chart_data.chart_style();
        let mut frame = RenderFrame::new(viewport);

        for (section, rect) in &layout.sections {
            match section {
                XAxisSection::Content => content.draw(*rect, &mut frame)?,
                XAxisSection::Labels => {
                    let labels = chart_data.x_axis_labels();
                    let layout_kind = chart_data.data_sets().series_layout();
                    let xs = series_positions(labels.len(), layout_kind, rect.x, rect.width);
                    let y = rect.y + rect.height * 0.5;
                    for (label, x) in labels.into_iter().zip(xs) {
                        if label.is_empty() {
                            continue;
                        }
                        frame.push_text(TextPrimitive::new(
                            label,
                            x,
                            y,
                            style.x_axis_label_font_size_px,
                            style.x_axis_label_color,
                            TextHAlign::Center,
                        ));
                    }
                }
                XAxisSection::Title => {
                    if let Some(title) = chart_data.x_axis_title().filter(|t| !t.is_empty()) {
                        frame.push_text(TextPrimitive::new(
                            title,
                            rect.x + rect.width * 0.5,
                            rect.y + rect.height * 0.5,
                            style.x_axis_title_font_size_px,
                            style.x_axis_title_color,
                            TextHAlign::Center,
                        ));
                    }
                }
            }
        }

        self.pending.set(false);
        trace!(
            sections = layout.sections.len(),
            texts = frame.texts.len(),
            scale_factor = layout.scale_factor,
            "x-axis labels rendered"
        );
        Ok(frame)
    }

    /// Renders only when a change is pending. Returns `true` when a frame
    /// was handed to `renderer`.
    pub fn present<D, V, R>(
        &mut self,
        renderer: &mut R,
        content: &V,
        chart_data: &ChartData<D>,
        viewport: Viewport,
    ) -> ChartResult<bool>
    where
        D: ChartDataSet,
        V: ChartView + ?Sized,
        R: Renderer + ?Sized,
    {
        if !self.needs_render() {
            return Ok(false);
        }
        let frame = self.render(content, chart_data, viewport)?;
        renderer.render(&frame)?;
        Ok(true)
    }
}
