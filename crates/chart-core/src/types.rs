// File: crates/chart-core/src/types.rs
// Summary: Shared types (chart kinds, chart identity, host calling convention).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Chart kind, as written in the `type` field of a chart or dataset.
/// Unknown kinds are kept verbatim so they round-trip through the config.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartType {
    Line,
    Radar,
    Scatter,
    Bar,
    Bubble,
    Doughnut,
    Pie,
    PolarArea,
    Other(String),
}

impl ChartType {
    pub fn as_str(&self) -> &str {
        match self {
            ChartType::Line => "line",
            ChartType::Radar => "radar",
            ChartType::Scatter => "scatter",
            ChartType::Bar => "bar",
            ChartType::Bubble => "bubble",
            ChartType::Doughnut => "doughnut",
            ChartType::Pie => "pie",
            ChartType::PolarArea => "polarArea",
            ChartType::Other(s) => s,
        }
    }
}

impl From<&str> for ChartType {
    fn from(s: &str) -> Self {
        match s {
            "line" => ChartType::Line,
            "radar" => ChartType::Radar,
            "scatter" => ChartType::Scatter,
            "bar" => ChartType::Bar,
            "bubble" => ChartType::Bubble,
            "doughnut" => ChartType::Doughnut,
            "pie" => ChartType::Pie,
            "polarArea" => ChartType::PolarArea,
            other => ChartType::Other(other.to_string()),
        }
    }
}

impl From<String> for ChartType {
    fn from(s: String) -> Self { ChartType::from(s.as_str()) }
}

impl From<ChartType> for String {
    fn from(t: ChartType) -> Self { t.as_str().to_string() }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Opaque identity of a chart instance; plugins key per-chart state by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartId(u64);

impl ChartId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Which calling convention the host uses for option-carrying hooks.
///
/// `Legacy` hosts call `before_update(chart, options)`; `Modern` hosts call
/// `before_update(chart, args, options)`. Plugins must accept both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HostVersion {
    Legacy,
    #[default]
    Modern,
}
