// File: crates/demo/src/main.rs
// Summary: Demo loads (or builds) a chart config, runs one update with the color scheme plugin,
//          prints the colors the host laid out, then replays a hover and a mouse-out.
// Usage: colorschemes-demo [chart.json] [palettes.json]

use anyhow::{Context, Result};
use chart_colorschemes::{register_with, ColorSchemesOptions, PaletteTable};
use chart_core::{Chart, ChartConfig, ChartEvent, ColorSlot, ColorValue, Dataset, PluginRegistry};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => sample_config(),
    };
    let palettes = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("failed to read '{path}'"))?;
            PaletteTable::from_json(&text).with_context(|| format!("failed to parse palettes '{path}'"))?
        }
        None => PaletteTable::builtin(),
    };
    log::info!("{} scheme(s) available", palettes.names().count());

    let mut registry = PluginRegistry::new();
    register_with(&mut registry, ColorSchemesOptions::default(), Arc::new(palettes))?;

    let mut chart = Chart::new(config);
    let before = chart.config.clone();
    chart.update(&registry);

    println!("Chart type: {}", chart.config.chart_type);
    for (i, (style, dataset)) in chart.frame().iter().zip(chart.config.datasets()).enumerate() {
        let label = dataset.label.as_deref().unwrap_or("(unlabelled)");
        println!("  [{i}] {label}");
        println!("      backgroundColor      = {}", show(&style.background_color));
        println!("      borderColor          = {}", show(&style.border_color));
        println!("      pointBackgroundColor = {}", show(&style.point_background_color));
        println!("      pointBorderColor     = {}", show(&style.point_border_color));
    }
    if chart.config != before {
        anyhow::bail!("chart config was not restored after update");
    }
    println!("Config restored after update.");

    for event in [ChartEvent::hover(10.0, 10.0), ChartEvent::mouse_out(-1.0, -1.0)] {
        chart.handle_event(&event, &registry);
        log::debug!("{:?}: {} dataset style(s) in frame", event.kind, chart.frame().len());
    }
    if chart.config != before {
        anyhow::bail!("chart config was not restored after events");
    }
    println!("Config unchanged after events.");
    Ok(())
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse chart config '{}'", path.display()))
}

fn sample_config() -> ChartConfig {
    let mut config = ChartConfig::new("line");
    for (i, label) in ["alpha", "beta", "gamma"].iter().enumerate() {
        let data = (0..6).map(|x| ((x + i) as f64 * 0.7).sin());
        config.add_dataset(Dataset::with_data(data).with_label(*label));
    }
    config.add_dataset(Dataset::with_data([4.0, 2.0, 1.0]).with_type("pie").with_label("share"));
    config
}

fn show(value: &ColorSlot) -> String {
    match value {
        None => "(absent)".to_string(),
        Some(None) => "null".to_string(),
        Some(Some(ColorValue::Single(c))) => c.clone(),
        Some(Some(ColorValue::List(cs))) => format!("[{}]", cs.join(", ")),
    }
}
