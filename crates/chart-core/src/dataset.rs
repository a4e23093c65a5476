// File: crates/chart-core/src/dataset.rs
// Summary: Dataset model (one data series plus its styling fields) and chart configuration.
// Notes:
// - Field names serialize in camelCase to match the host's chart config format.
// - Color fields are `ColorSlot`s: absent, explicit `null`, or a color. Plugins must
//   be able to restore all three.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::{self, ColorSlot, ColorValue};
use crate::types::ChartType;

/// Identity of a dataset within the process. Clones share the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetId(u64);

impl DatasetId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for DatasetId {
    fn default() -> Self { Self::next() }
}

/// The four color fields a color plugin may touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorField {
    BackgroundColor,
    BorderColor,
    PointBackgroundColor,
    PointBorderColor,
}

impl ColorField {
    pub const ALL: [ColorField; 4] = [
        ColorField::BackgroundColor,
        ColorField::BorderColor,
        ColorField::PointBackgroundColor,
        ColorField::PointBorderColor,
    ];

    /// Name of the field in the chart config.
    pub fn name(self) -> &'static str {
        match self {
            ColorField::BackgroundColor => "backgroundColor",
            ColorField::BorderColor => "borderColor",
            ColorField::PointBackgroundColor => "pointBackgroundColor",
            ColorField::PointBorderColor => "pointBorderColor",
        }
    }
}

/// A single data point. Only the count matters for styling, so shapes other
/// than numbers and numeric `{x, y}` pairs are kept verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    Value(f64),
    Xy { x: f64, y: f64 },
    Missing,
    Other(Value),
}

impl From<f64> for DataPoint {
    fn from(v: f64) -> Self { DataPoint::Value(v) }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self { DataPoint::Xy { x, y } }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip)]
    pub id: DatasetId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Per-dataset chart kind; falls back to the chart's kind when unset.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default, deserialize_with = "color::present", skip_serializing_if = "Option::is_none")]
    pub background_color: ColorSlot,
    #[serde(default, deserialize_with = "color::present", skip_serializing_if = "Option::is_none")]
    pub border_color: ColorSlot,
    #[serde(default, deserialize_with = "color::present", skip_serializing_if = "Option::is_none")]
    pub point_background_color: ColorSlot,
    #[serde(default, deserialize_with = "color::present", skip_serializing_if = "Option::is_none")]
    pub point_border_color: ColorSlot,
}

impl Dataset {
    pub fn new() -> Self { Self::default() }

    pub fn with_data<P: Into<DataPoint>>(data: impl IntoIterator<Item = P>) -> Self {
        Self { data: data.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn with_type(mut self, chart_type: impl Into<ChartType>) -> Self {
        self.chart_type = Some(chart_type.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, field: ColorField, value: impl Into<ColorValue>) -> Self {
        *self.color_mut(field) = Some(Some(value.into()));
        self
    }

    pub fn color(&self, field: ColorField) -> &ColorSlot {
        match field {
            ColorField::BackgroundColor => &self.background_color,
            ColorField::BorderColor => &self.border_color,
            ColorField::PointBackgroundColor => &self.point_background_color,
            ColorField::PointBorderColor => &self.point_border_color,
        }
    }

    pub fn color_mut(&mut self, field: ColorField) -> &mut ColorSlot {
        match field {
            ColorField::BackgroundColor => &mut self.background_color,
            ColorField::BorderColor => &mut self.border_color,
            ColorField::PointBackgroundColor => &mut self.point_background_color,
            ColorField::PointBorderColor => &mut self.point_border_color,
        }
    }

    /// Dataset kind if set, otherwise `chart_default`.
    pub fn effective_type<'a>(&'a self, chart_default: &'a ChartType) -> &'a ChartType {
        self.chart_type.as_ref().unwrap_or(chart_default)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Per-chart plugin options keyed by plugin id. `false` disables the plugin.
    #[serde(default)]
    pub plugins: Map<String, Value>,
}

/// Chart configuration as the host receives it: `{ type, data, options }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(default)]
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn new(chart_type: impl Into<ChartType>) -> Self {
        Self { chart_type: chart_type.into(), data: ChartData::default(), options: ChartOptions::default() }
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.data.datasets.push(dataset);
    }

    pub fn datasets(&self) -> &[Dataset] { &self.data.datasets }

    pub fn datasets_mut(&mut self) -> &mut [Dataset] { &mut self.data.datasets }

    pub fn set_plugin_options(&mut self, plugin_id: &str, options: Value) {
        self.options.plugins.insert(plugin_id.to_string(), options);
    }
}
