use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Fraction of the raw drag translation applied to the content offset.
pub const DRAG_TRANSLATION_RATIO: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
}

/// Manual horizontal pan driven by drag gestures.
///
/// While a drag is active the visible offset is
/// `committed + translation * DRAG_TRANSLATION_RATIO`; releasing the drag
/// commits that offset. Offsets are not clamped to the content bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragPanState {
    mode: InteractionMode,
    offset_x: f64,
    committed_offset_x: f64,
}

impl DragPanState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    /// Offset to apply to the content this frame.
    #[must_use]
    pub fn offset(self) -> f64 {
        self.offset_x
    }

    /// Offset accumulated by completed drags.
    #[must_use]
    pub fn committed_offset(self) -> f64 {
        self.committed_offset_x
    }

    /// Updates the live offset from the total translation of the current drag.
    pub fn on_drag_changed(&mut self, translation_x: f64) -> ChartResult<()> {
        let offset = self.resolve_offset(translation_x)?;
        self.mode = InteractionMode::Dragging;
        self.offset_x = offset;
        trace!(translation_x, offset, "drag pan changed");
        Ok(())
    }

    /// Finishes the drag and commits the resulting offset.
    pub fn on_drag_ended(&mut self, translation_x: f64) -> ChartResult<()> {
        let offset = self.resolve_offset(translation_x)?;
        self.mode = InteractionMode::Idle;
        self.offset_x = offset;
        self.committed_offset_x = offset;
        trace!(translation_x, offset, "drag pan committed");
        Ok(())
    }

    /// Abandons the active drag and returns to the last committed offset.
    pub fn on_drag_cancelled(&mut self) {
        self.mode = InteractionMode::Idle;
        self.offset_x = self.committed_offset_x;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn resolve_offset(self, translation_x: f64) -> ChartResult<f64> {
        if !translation_x.is_finite() {
            return Err(ChartError::InvalidData(
                "drag translation must be finite".to_owned(),
            ));
        }
        Ok(self.committed_offset_x + translation_x * DRAG_TRANSLATION_RATIO)
    }
}
