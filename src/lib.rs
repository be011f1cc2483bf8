//! line-chart-rs: interactive single-series line chart.
//!
//! Samples are scaled once into plot space; a horizontal pan/zoom transform,
//! a nearest-sample hover overlay and tooltip placement sit on top. Drawing
//! goes through the [`render::Renderer`] trait, with a headless
//! [`render::NullRenderer`] and an optional Cairo backend and GTK4 adapter.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
