// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart config model, color helper and plugin host.

pub mod chart;
pub mod color;
pub mod dataset;
pub mod plugin;
pub mod types;

pub use chart::{Chart, DatasetStyle};
pub use color::{ColorParseError, ColorSlot, ColorValue, Rgba};
pub use dataset::{ChartConfig, ChartData, ChartOptions, ColorField, DataPoint, Dataset, DatasetId};
pub use plugin::{ChartEvent, EventKind, Plugin, PluginRegistry, RegistryError};
pub use types::{ChartId, ChartType, HostVersion};
