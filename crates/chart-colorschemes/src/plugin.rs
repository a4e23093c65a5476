// File: crates/chart-colorschemes/src/plugin.rs
// Summary: Lifecycle binding; assigns colors before layout and restores them after.

use chart_core::{Chart, ChartEvent, ChartId, Plugin, PluginRegistry, RegistryError};
use log::{debug, warn};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::assign::{assign_colors, restore, SavedColors};
use crate::options::ColorSchemesOptions;
use crate::palette::PaletteTable;

/// Fixed id the plugin registers under; per-chart options live at `options.plugins.colorschemes`.
pub const PLUGIN_ID: &str = "colorschemes";

/// Pick the options value out of a hook's positional arguments. Legacy hosts
/// pass options in the `args` slot and nothing in the `options` slot.
pub fn normalize_options<'a>(args: Option<&'a Value>, options: Option<&'a Value>) -> Option<&'a Value> {
    options.or(args)
}

pub struct ColorSchemes {
    defaults: ColorSchemesOptions,
    palettes: Arc<PaletteTable>,
    saved: RefCell<HashMap<ChartId, SavedColors>>,
}

impl ColorSchemes {
    pub fn new(defaults: ColorSchemesOptions, palettes: Arc<PaletteTable>) -> Self {
        Self { defaults, palettes, saved: RefCell::new(HashMap::new()) }
    }

    pub fn defaults(&self) -> &ColorSchemesOptions { &self.defaults }

    pub fn palettes(&self) -> &PaletteTable { &self.palettes }

    /// Whether colors are currently applied to `chart` and awaiting restore.
    pub fn is_pending(&self, chart: ChartId) -> bool { self.saved.borrow().contains_key(&chart) }

    /// Defaults merged with the chart's own options. Bad overrides fall back to defaults.
    pub fn effective_options(&self, options: Option<&Value>) -> ColorSchemesOptions {
        match options {
            Some(v) => self.defaults.merge_json(v).unwrap_or_else(|e| {
                warn!("{PLUGIN_ID}: {e}; using defaults");
                self.defaults.clone()
            }),
            None => self.defaults.clone(),
        }
    }

    fn assign(&self, chart: &mut Chart, options: &ColorSchemesOptions) {
        // Undo any earlier assign that was never paired with a restore.
        self.restore(chart);
        if let Some(saved) = assign_colors(&mut chart.config, options, &self.palettes) {
            self.saved.borrow_mut().insert(chart.id(), saved);
        }
    }

    fn restore(&self, chart: &mut Chart) {
        let pending = self.saved.borrow_mut().remove(&chart.id());
        if let Some(saved) = pending {
            restore(&mut chart.config, saved);
        }
    }
}

impl Default for ColorSchemes {
    fn default() -> Self { Self::new(ColorSchemesOptions::default(), Arc::new(PaletteTable::builtin())) }
}

impl Plugin for ColorSchemes {
    fn id(&self) -> &'static str { PLUGIN_ID }

    fn before_update(&self, chart: &mut Chart, args: Option<&Value>, options: Option<&Value>) {
        let options = self.effective_options(normalize_options(args, options));
        self.assign(chart, &options);
    }

    fn after_update(&self, chart: &mut Chart) {
        self.restore(chart);
    }

    fn before_event(&self, chart: &mut Chart, _event: &ChartEvent, options: Option<&Value>) {
        let options = self.effective_options(options);
        if options.hover_reset {
            debug!("{PLUGIN_ID}: reapplying colors for event");
            self.assign(chart, &options);
        }
    }

    fn after_event(&self, chart: &mut Chart) {
        // Only charts that reapplied colors in before_event have anything pending.
        self.restore(chart);
    }
}

/// Register the plugin with built-in palettes and default options.
pub fn register(registry: &mut PluginRegistry) -> Result<(), RegistryError> {
    registry.register(Box::new(ColorSchemes::default()))
}

/// Register the plugin with explicit defaults and a host-supplied palette table.
pub fn register_with(
    registry: &mut PluginRegistry,
    defaults: ColorSchemesOptions,
    palettes: Arc<PaletteTable>,
) -> Result<(), RegistryError> {
    registry.register(Box::new(ColorSchemes::new(defaults, palettes)))
}
