use crate::core::SeriesLayout;
use crate::core::primitives::non_degenerate_domain;
use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale over `[min, max]`, widening a collapsed domain by one unit.
    pub fn from_extent(min: f64, max: f64) -> ChartResult<Self> {
        let (start, end) = non_degenerate_domain(min, max);
        Self::new(start, end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` onto `[pixel_start, pixel_start + pixel_extent]`.
    pub fn domain_to_pixel(
        self,
        value: f64,
        pixel_start: f64,
        pixel_extent: f64,
    ) -> ChartResult<f64> {
        if !pixel_extent.is_finite() || pixel_extent < 0.0 {
            return Err(ChartError::InvalidData(
                "pixel extent must be finite and >= 0".to_owned(),
            ));
        }
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(pixel_start + normalized * pixel_extent)
    }

    /// Vertical variant of [`Self::domain_to_pixel`]: the domain end maps to the
    /// top of the span.
    pub fn domain_to_pixel_flipped(
        self,
        value: f64,
        pixel_start: f64,
        pixel_extent: f64,
    ) -> ChartResult<f64> {
        let offset = self.domain_to_pixel(value, 0.0, pixel_extent)?;
        Ok(pixel_start + pixel_extent - offset)
    }
}

/// Horizontal pixel positions for `count` series items across a span.
#[must_use]
pub fn series_positions(count: usize, layout: SeriesLayout, start: f64, extent: f64) -> Vec<f64> {
    match (layout, count) {
        (_, 0) => Vec::new(),
        (SeriesLayout::EdgeAligned, 1) => vec![start],
        (SeriesLayout::EdgeAligned, n) => {
            let step = extent / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
        (SeriesLayout::Slotted, n) => {
            let slot = extent / n as f64;
            (0..n).map(|i| start + (i as f64 + 0.5) * slot).collect()
        }
    }
}
