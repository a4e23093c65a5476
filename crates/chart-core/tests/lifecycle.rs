// File: crates/chart-core/tests/lifecycle.rs
// Purpose: Hook ordering, calling conventions, per-chart disabling and registry behavior.

use chart_core::{Chart, ChartConfig, ChartEvent, Dataset, HostVersion, Plugin, PluginRegistry, RegistryError};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Records every hook call as a short string.
struct Recorder {
    id: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    fn new(id: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Box<Self> {
        Box::new(Self { id, log: Rc::clone(log) })
    }
}

fn show(v: Option<&Value>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl Plugin for Recorder {
    fn id(&self) -> &'static str { self.id }

    fn before_update(&self, chart: &mut Chart, args: Option<&Value>, options: Option<&Value>) {
        // colors written here must be visible to layout
        chart.config.data.datasets[0].border_color = Some(Some("hooked".into()));
        self.log.borrow_mut().push(format!("{}:before_update {} {}", self.id, show(args), show(options)));
    }

    fn after_update(&self, chart: &mut Chart) {
        chart.config.data.datasets[0].border_color = None;
        self.log.borrow_mut().push(format!("{}:after_update", self.id));
    }

    fn before_event(&self, _chart: &mut Chart, _event: &ChartEvent, options: Option<&Value>) {
        self.log.borrow_mut().push(format!("{}:before_event {}", self.id, show(options)));
    }

    fn after_event(&self, _chart: &mut Chart) {
        self.log.borrow_mut().push(format!("{}:after_event", self.id));
    }
}

fn chart() -> Chart {
    let mut config = ChartConfig::new("line");
    config.add_dataset(Dataset::with_data([1.0, 2.0]));
    Chart::new(config)
}

#[test]
fn update_runs_hooks_around_layout() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = PluginRegistry::new();
    registry.register(Recorder::new("a", &log)).unwrap();
    registry.register(Recorder::new("b", &log)).unwrap();

    let mut chart = chart();
    chart.config.set_plugin_options("a", json!({ "k": 1 }));
    chart.update(&registry);

    assert_eq!(
        *log.borrow(),
        vec![
            r#"a:before_update {"cancelable":true} {"k":1}"#.to_string(),
            r#"b:before_update {"cancelable":true} {}"#.to_string(),
            "a:after_update".to_string(),
            "b:after_update".to_string(),
        ]
    );
    assert_eq!(chart.frame()[0].border_color, Some(Some("hooked".into())));
    assert_eq!(chart.config.datasets()[0].border_color, None);
}

#[test]
fn legacy_host_puts_options_in_args_slot() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = PluginRegistry::new();
    registry.register(Recorder::new("a", &log)).unwrap();

    let mut chart = chart().with_host_version(HostVersion::Legacy);
    chart.config.set_plugin_options("a", json!({ "k": 2 }));
    chart.update(&registry);

    assert_eq!(log.borrow()[0], r#"a:before_update {"k":2} -"#);
}

#[test]
fn disabled_plugin_gets_no_calls() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = PluginRegistry::new();
    registry.register(Recorder::new("a", &log)).unwrap();

    let mut chart = chart();
    chart.config.set_plugin_options("a", json!(false));
    chart.update(&registry);
    chart.handle_event(&ChartEvent::hover(0.0, 0.0), &registry);

    assert!(log.borrow().is_empty());
    assert_eq!(chart.frame()[0].border_color, None);
}

#[test]
fn events_call_before_and_after_hooks() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = PluginRegistry::new();
    registry.register(Recorder::new("a", &log)).unwrap();

    let mut chart = chart();
    chart.handle_event(&ChartEvent::hover(1.0, 2.0), &registry);
    chart.handle_event(&ChartEvent::mouse_out(0.0, 0.0), &registry);

    assert_eq!(
        *log.borrow(),
        vec![
            "a:before_event {}".to_string(),
            "a:after_event".to_string(),
            "a:before_event {}".to_string(),
            "a:after_event".to_string(),
        ]
    );
}

#[test]
fn modern_host_keeps_frame_across_events() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = PluginRegistry::new();
    registry.register(Recorder::new("a", &log)).unwrap();

    let mut modern = chart();
    modern.update(&registry);
    modern.handle_event(&ChartEvent::hover(1.0, 2.0), &registry);
    assert_eq!(modern.frame()[0].border_color, Some(Some("hooked".into())));

    let mut legacy = chart().with_host_version(HostVersion::Legacy);
    legacy.update(&registry);
    legacy.handle_event(&ChartEvent::hover(1.0, 2.0), &registry);
    assert_eq!(legacy.frame()[0].border_color, None);
}

#[test]
fn registry_rejects_duplicate_ids() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = PluginRegistry::new();
    assert!(registry.is_empty());
    registry.register(Recorder::new("a", &log)).unwrap();
    assert_eq!(registry.register(Recorder::new("a", &log)), Err(RegistryError::DuplicateId("a")));
    assert!(registry.contains("a"));
    assert!(!registry.contains("b"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn charts_have_distinct_ids() {
    assert_ne!(chart().id(), chart().id());
}
