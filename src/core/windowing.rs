use tracing::warn;

/// Capability exposed by chart data that can limit how many points fit on
/// one screen width.
pub trait WindowedChartData {
    /// Requested number of points per screen width, if any.
    fn window_size(&self) -> Option<i64>;

    /// Number of points in the chart's primary data set.
    fn total_points(&self) -> usize;

    /// Horizontal content-width multiplier for this chart.
    fn x_axis_scale_factor(&self) -> f64 {
        x_axis_scale_factor(self.total_points(), self.window_size())
    }
}

/// Returns the content-width multiplier for a windowed chart.
///
/// The factor only shrinks content, when fewer points exist than the window
/// requests. Every other combination (no window, non-positive window, empty
/// data, at least a full window of points) yields `1.0`.
#[must_use]
pub fn x_axis_scale_factor(total_points: usize, window_size: Option<i64>) -> f64 {
    let Some(window_size) = window_size else {
        return 1.0;
    };
    if window_size <= 0 {
        warn!(window_size, "ignoring non-positive view window");
        return 1.0;
    }

    let total = i64::try_from(total_points).unwrap_or(i64::MAX);
    if total > 0 && total < window_size {
        return total as f64 / window_size as f64;
    }

    1.0
}

/// Width of the scaled chart content.
#[must_use]
pub fn content_width(available_width: f64, factor: f64) -> f64 {
    available_width * factor
}

#[cfg(test)]
mod tests {
    use super::{content_width, x_axis_scale_factor};

    #[test]
    fn factor_shrinks_only_below_window() {
        assert_eq!(x_axis_scale_factor(12, Some(30)), 0.4);
        assert_eq!(x_axis_scale_factor(12, Some(5)), 1.0);
        assert_eq!(x_axis_scale_factor(12, Some(12)), 1.0);
    }

    #[test]
    fn factor_ignores_missing_and_non_positive_windows() {
        assert_eq!(x_axis_scale_factor(3, None), 1.0);
        assert_eq!(x_axis_scale_factor(3, Some(0)), 1.0);
        assert_eq!(x_axis_scale_factor(3, Some(-4)), 1.0);
    }

    #[test]
    fn factor_is_one_for_empty_data() {
        assert_eq!(x_axis_scale_factor(0, Some(10)), 1.0);
    }

    #[test]
    fn content_width_scales_available_width() {
        assert_eq!(content_width(500.0, 0.4), 200.0);
        assert_eq!(content_width(500.0, 1.0), 500.0);
    }
}
