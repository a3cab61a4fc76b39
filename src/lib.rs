//! chart-kit: declarative line, bar and ranged-bar charts.
//!
//! Data sets are plain values wrapped in a [`api::ChartData`] aggregate.
//! Chart views draw that data into backend-agnostic [`render::RenderFrame`]s
//! and modifiers such as [`api::XAxisLabels`] decorate the views with axis
//! labels and drag panning.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartData, ChartStyle, XAxisLabels};
pub use error::{ChartError, ChartResult};
