// File: crates/chart-core/src/chart.rs
// Summary: Chart instance that drives plugin lifecycle hooks around layout and events.

use serde_json::{json, Map, Value};

use crate::color::ColorSlot;
use crate::dataset::{ChartConfig, Dataset, DatasetId};
use crate::plugin::{ChartEvent, Plugin, PluginRegistry};
use crate::types::{ChartId, HostVersion};

/// Styles the host captured for one dataset during layout.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetStyle {
    pub dataset: DatasetId,
    pub background_color: ColorSlot,
    pub border_color: ColorSlot,
    pub point_background_color: ColorSlot,
    pub point_border_color: ColorSlot,
}

impl From<&Dataset> for DatasetStyle {
    fn from(d: &Dataset) -> Self {
        Self {
            dataset: d.id,
            background_color: d.background_color.clone(),
            border_color: d.border_color.clone(),
            point_background_color: d.point_background_color.clone(),
            point_border_color: d.point_border_color.clone(),
        }
    }
}

pub struct Chart {
    id: ChartId,
    pub config: ChartConfig,
    pub host_version: HostVersion,
    frame: Vec<DatasetStyle>,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self { id: ChartId::next(), config, host_version: HostVersion::default(), frame: Vec::new() }
    }

    pub fn with_host_version(mut self, host_version: HostVersion) -> Self {
        self.host_version = host_version;
        self
    }

    pub fn id(&self) -> ChartId { self.id }

    /// Styles captured by the most recent layout pass.
    pub fn frame(&self) -> &[DatasetStyle] { &self.frame }

    /// Options for plugin `id` on this chart, or `None` when the chart disables it.
    pub fn plugin_options(&self, id: &str) -> Option<Value> {
        match self.config.options.plugins.get(id) {
            Some(Value::Bool(false)) => None,
            Some(Value::Bool(true)) | None => Some(Value::Object(Map::new())),
            Some(v) => Some(v.clone()),
        }
    }

    /// Run one update cycle: `before_update` hooks, layout, `after_update` hooks.
    pub fn update(&mut self, registry: &PluginRegistry) {
        let args = json!({ "cancelable": true });
        let enabled = self.enabled_plugins(registry);
        for (plugin, options) in &enabled {
            match self.host_version {
                HostVersion::Modern => plugin.before_update(self, Some(&args), Some(options)),
                HostVersion::Legacy => plugin.before_update(self, Some(options), None),
            }
        }
        self.layout();
        for (plugin, _) in &enabled {
            plugin.after_update(self);
        }
    }

    /// Dispatch an interaction event. Legacy hosts rebuild element styles from
    /// the configuration on every event; modern hosts keep the last layout.
    pub fn handle_event(&mut self, event: &ChartEvent, registry: &PluginRegistry) {
        let enabled = self.enabled_plugins(registry);
        for (plugin, options) in &enabled {
            plugin.before_event(self, event, Some(options));
        }
        if self.host_version == HostVersion::Legacy {
            self.layout();
        }
        for (plugin, _) in &enabled {
            plugin.after_event(self);
        }
    }

    fn enabled_plugins<'r>(&self, registry: &'r PluginRegistry) -> Vec<(&'r dyn Plugin, Value)> {
        registry
            .iter()
            .filter_map(|p| self.plugin_options(p.id()).map(|o| (p, o)))
            .collect()
    }

    fn layout(&mut self) {
        self.frame = self.config.datasets().iter().map(DatasetStyle::from).collect();
    }
}
