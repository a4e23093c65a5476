// File: crates/chart-core/src/plugin.rs
// Summary: Plugin trait (update/event lifecycle hooks) and the plugin registry.

use serde_json::Value;
use thiserror::Error;

use crate::Chart;

/// Interaction event kinds the host forwards to plugins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    MouseMove,
    MouseOut,
}

/// Interaction event in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartEvent {
    pub kind: EventKind,
    pub x: f64,
    pub y: f64,
}

impl ChartEvent {
    pub fn hover(x: f64, y: f64) -> Self { Self { kind: EventKind::MouseMove, x, y } }

    pub fn mouse_out(x: f64, y: f64) -> Self { Self { kind: EventKind::MouseOut, x, y } }
}

/// Lifecycle hooks a plugin can implement. All hooks default to no-ops.
///
/// Option-carrying hooks receive `args` and `options` positionally. Legacy
/// hosts put the options in the `args` slot and leave `options` empty, so
/// implementations should normalize the pair once before use.
pub trait Plugin {
    fn id(&self) -> &'static str;

    /// Called before the host lays out the chart from its configuration.
    fn before_update(&self, _chart: &mut Chart, _args: Option<&Value>, _options: Option<&Value>) {}

    /// Called after layout, once the host has captured the styles it needs.
    fn after_update(&self, _chart: &mut Chart) {}

    fn before_event(&self, _chart: &mut Chart, _event: &ChartEvent, _options: Option<&Value>) {}

    fn after_event(&self, _chart: &mut Chart) {}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a plugin with id '{0}' is already registered")]
    DuplicateId(&'static str),
}

/// Ordered set of plugins, keyed by their fixed id. Hooks run in registration order.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Result<(), RegistryError> {
        let id = plugin.id();
        if self.contains(id) {
            return Err(RegistryError::DuplicateId(id));
        }
        log::debug!("registered plugin '{id}'");
        self.plugins.push(plugin);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool { self.plugins.iter().any(|p| p.id() == id) }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Plugin> + '_ {
        self.plugins.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize { self.plugins.len() }

    pub fn is_empty(&self) -> bool { self.plugins.is_empty() }
}
