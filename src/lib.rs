//! chart-compiler: unified chart configuration compiler.
//!
//! Compiles one declarative chart description (`ChartData` + `ChartProps`)
//! into a renderer-ready option tree in the ECharts option schema. Host
//! adapters pass a target profile (`web` / `mobile`) and hand the result to
//! their engine binding through `render::OptionRenderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartController, ChartProps, ChartView, compile, compile_named};
pub use crate::core::{ChartData, ChartDataset, ChartType};
pub use error::{ChartError, ChartResult};
