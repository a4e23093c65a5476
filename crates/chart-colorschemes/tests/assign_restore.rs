// File: crates/chart-colorschemes/tests/assign_restore.rs
// Purpose: Color assignment by chart kind, override/reverse/custom options, and exact restore.

use chart_colorschemes::{assign_colors, restore, ColorSchemesOptions, PaletteTable};
use chart_core::{ChartConfig, ColorField, ColorSlot, ColorValue, Dataset};

fn single(s: &str) -> ColorSlot { Some(Some(ColorValue::from(s))) }

fn list(v: &[&str]) -> ColorSlot { Some(Some(ColorValue::List(v.iter().map(|s| s.to_string()).collect()))) }

fn chart(kind: &str, datasets: usize, points: usize) -> ChartConfig {
    let mut config = ChartConfig::new(kind);
    for _ in 0..datasets {
        config.add_dataset(Dataset::with_data((0..points).map(|i| i as f64)));
    }
    config
}

fn opts(scheme: &[&str]) -> ColorSchemesOptions {
    ColorSchemesOptions::default().with_scheme(scheme)
}

#[test]
fn line_fill_uses_alpha_and_border_is_raw() {
    let mut config = chart("line", 1, 3);
    let saved = assign_colors(&mut config, &opts(&["#fff", "#000"]).with_fill_alpha(0.5), &PaletteTable::new());
    assert!(saved.is_some());
    let d = &config.datasets()[0];
    assert_eq!(d.background_color, single("rgba(255, 255, 255, 0.5)"));
    assert_eq!(d.point_background_color, single("rgba(255, 255, 255, 0.5)"));
    assert_eq!(d.border_color, single("#fff"));
    assert_eq!(d.point_border_color, single("#fff"));
}

#[test]
fn pie_gets_one_color_per_point() {
    let mut config = chart("pie", 1, 5);
    assign_colors(&mut config, &opts(&["c0", "c1", "c2"]), &PaletteTable::new()).expect("assigned");
    let d = &config.datasets()[0];
    assert_eq!(d.background_color, list(&["c0", "c1", "c2", "c0", "c1"]));
    assert_eq!(d.border_color, None);
}

#[test]
fn pie_reverse_applies_to_points() {
    let mut config = chart("doughnut", 1, 4);
    assign_colors(&mut config, &opts(&["c0", "c1", "c2"]).with_reverse(true), &PaletteTable::new()).expect("assigned");
    assert_eq!(config.datasets()[0].background_color, list(&["c2", "c1", "c0", "c2"]));
}

#[test]
fn other_kinds_get_single_background() {
    let mut config = chart("bar", 2, 4);
    assign_colors(&mut config, &opts(&["c0", "c1", "c2"]), &PaletteTable::new()).expect("assigned");
    assert_eq!(config.datasets()[0].background_color, single("c0"));
    assert_eq!(config.datasets()[1].background_color, single("c1"));
    assert_eq!(config.datasets()[1].border_color, None);
}

#[test]
fn dataset_type_overrides_chart_type() {
    let mut config = ChartConfig::new("bar");
    config.add_dataset(Dataset::with_data([1.0, 2.0]));
    config.add_dataset(Dataset::with_data([1.0, 2.0]).with_type("line"));
    assign_colors(&mut config, &opts(&["#ff0000", "#00ff00"]), &PaletteTable::new()).expect("assigned");
    assert_eq!(config.datasets()[0].border_color, None);
    assert_eq!(config.datasets()[1].border_color, single("#00ff00"));
    assert_eq!(config.datasets()[1].background_color, single("rgba(0, 255, 0, 0.5)"));
}

#[test]
fn datasets_cycle_through_scheme() {
    let scheme = ["c0", "c1", "c2"];
    let mut config = chart("bar", 7, 1);
    assign_colors(&mut config, &opts(&scheme), &PaletteTable::new()).expect("assigned");
    let ds = config.datasets();
    for i in 0..ds.len() - scheme.len() {
        assert_eq!(ds[i].background_color, ds[i + scheme.len()].background_color, "dataset {i}");
    }
}

#[test]
fn reverse_picks_from_the_end() {
    let mut config = chart("bar", 2, 1);
    assign_colors(&mut config, &opts(&["c0", "c1", "c2"]).with_reverse(true), &PaletteTable::new()).expect("assigned");
    assert_eq!(config.datasets()[0].background_color, single("c2"));
    assert_eq!(config.datasets()[1].background_color, single("c1"));
}

#[test]
fn existing_colors_kept_without_override() {
    let mut config = ChartConfig::new("line");
    config.add_dataset(Dataset::with_data([1.0]).with_color(ColorField::BorderColor, "#123456"));
    let saved = assign_colors(&mut config, &opts(&["#ff0000"]), &PaletteTable::new()).expect("assigned");
    let d = &config.datasets()[0];
    assert_eq!(d.border_color, single("#123456"));
    assert_eq!(d.point_border_color, single("#ff0000"));
    assert!(saved.contains(0));
    assert!(!saved.overwrote(0, ColorField::BorderColor));
    assert!(saved.overwrote(0, ColorField::PointBorderColor));
}

#[test]
fn override_replaces_and_restore_recovers() {
    let mut config = ChartConfig::new("line");
    config.add_dataset(Dataset::with_data([1.0]).with_color(ColorField::BorderColor, "#123456"));
    let before = config.clone();

    let saved = assign_colors(&mut config, &opts(&["#ff0000"]).with_override(true), &PaletteTable::new())
        .expect("assigned");
    assert_eq!(config.datasets()[0].border_color, single("#ff0000"));

    restore(&mut config, saved);
    assert_eq!(config, before);
}

#[test]
fn assign_then_restore_is_identity_for_every_kind() {
    for kind in ["line", "radar", "scatter", "pie", "doughnut", "polarArea", "bar", "bubble", "custom"] {
        let mut config = ChartConfig::new(kind);
        config.add_dataset(Dataset::with_data([1.0, 2.0, 3.0]));
        config.add_dataset(
            Dataset::with_data([4.0, 5.0])
                .with_color(ColorField::BackgroundColor, "#abcdef")
                .with_color(ColorField::PointBorderColor, ColorValue::List(vec!["#000".into(), "#111".into()])),
        );
        let before = config.clone();
        for override_colors in [false, true] {
            let options = ColorSchemesOptions::default().with_override(override_colors);
            let saved = assign_colors(&mut config, &options, &PaletteTable::builtin()).expect("assigned");
            restore(&mut config, saved);
            assert_eq!(config, before, "kind {kind}, override {override_colors}");
        }
    }
}

#[test]
fn cloned_datasets_restore_independently() {
    let template = Dataset::with_data([1.0, 2.0]).with_color(ColorField::BorderColor, "#123456");
    let mut config = ChartConfig::new("line");
    config.add_dataset(template.clone());
    config.add_dataset(Dataset::with_data([3.0, 4.0]));
    config.add_dataset(template);
    assert_eq!(config.datasets()[0].id, config.datasets()[2].id);
    let before = config.clone();

    let options = opts(&["#ff0000", "#00ff00", "#0000ff"]).with_override(true);
    let saved = assign_colors(&mut config, &options, &PaletteTable::new()).expect("assigned");
    assert_eq!(saved.len(), 3);
    assert_eq!(config.datasets()[0].border_color, single("#ff0000"));
    assert_eq!(config.datasets()[2].border_color, single("#0000ff"));

    restore(&mut config, saved);
    assert_eq!(config, before);
}

#[test]
fn explicit_null_color_counts_as_set() {
    let mut dataset = Dataset::with_data([1.0]);
    dataset.border_color = Some(None);
    let mut config = ChartConfig::new("line");
    config.add_dataset(dataset);
    let before = config.clone();

    let saved = assign_colors(&mut config, &opts(&["#ff0000"]), &PaletteTable::new()).expect("assigned");
    assert_eq!(config.datasets()[0].border_color, Some(None));
    assert_eq!(config.datasets()[0].point_border_color, single("#ff0000"));
    assert!(!saved.overwrote(0, ColorField::BorderColor));
    restore(&mut config, saved);
    assert_eq!(config, before);

    let saved = assign_colors(&mut config, &opts(&["#ff0000"]).with_override(true), &PaletteTable::new())
        .expect("assigned");
    assert_eq!(config.datasets()[0].border_color, single("#ff0000"));
    restore(&mut config, saved);
    assert_eq!(config.datasets()[0].border_color, Some(None));
    assert_eq!(config, before);
}

#[test]
fn restore_skips_position_whose_dataset_changed() {
    let mut config = chart("bar", 1, 1);
    let saved = assign_colors(&mut config, &opts(&["c0"]), &PaletteTable::new()).expect("assigned");
    config.data.datasets[0] = Dataset::with_data([1.0]).with_color(ColorField::BackgroundColor, "fresh");
    restore(&mut config, saved);
    assert_eq!(config.datasets()[0].background_color, single("fresh"));
}

#[test]
fn restore_clears_fields_that_were_absent() {
    let mut config = chart("radar", 1, 2);
    let saved = assign_colors(&mut config, &ColorSchemesOptions::default(), &PaletteTable::builtin()).expect("assigned");
    assert!(config.datasets()[0].background_color.is_some());
    restore(&mut config, saved);
    for field in ColorField::ALL {
        assert_eq!(config.datasets()[0].color(field), &None, "{}", field.name());
    }
}

#[test]
fn restore_skips_datasets_without_record() {
    let mut config = chart("bar", 1, 1);
    let saved = assign_colors(&mut config, &opts(&["c0"]), &PaletteTable::new()).expect("assigned");
    config.add_dataset(Dataset::with_data([1.0]).with_color(ColorField::BackgroundColor, "keep"));
    restore(&mut config, saved);
    assert_eq!(config.datasets()[0].background_color, None);
    assert_eq!(config.datasets()[1].background_color, single("keep"));
}

#[test]
fn unresolved_scheme_is_a_no_op() {
    let mut config = chart("line", 2, 2);
    let before = config.clone();
    let options = ColorSchemesOptions::default().with_scheme("brewer.DoesNotExist");
    assert!(assign_colors(&mut config, &options, &PaletteTable::builtin()).is_none());
    assert_eq!(config, before);
}

#[test]
fn custom_result_replaces_scheme() {
    let mut config = chart("bar", 2, 1);
    let options = opts(&["c0", "c1"]).with_custom(|_| Some(vec!["x".to_string()]));
    assign_colors(&mut config, &options, &PaletteTable::new()).expect("assigned");
    assert_eq!(config.datasets()[0].background_color, single("x"));
    assert_eq!(config.datasets()[1].background_color, single("x"));
}

#[test]
fn custom_empty_result_falls_back_to_edited_copy() {
    let mut config = chart("bar", 2, 1);
    let options = opts(&["c0", "c1"]).with_custom(|copy| {
        copy.reverse();
        Some(Vec::new())
    });
    assign_colors(&mut config, &options, &PaletteTable::new()).expect("assigned");
    assert_eq!(config.datasets()[0].background_color, single("c1"));
    assert_eq!(config.datasets()[1].background_color, single("c0"));
}

#[test]
fn custom_emptying_the_scheme_assigns_nothing() {
    let mut config = chart("bar", 2, 1);
    let before = config.clone();
    let options = opts(&["c0", "c1"]).with_custom(|copy| {
        copy.clear();
        None
    });
    assert!(assign_colors(&mut config, &options, &PaletteTable::new()).is_none());
    assert_eq!(config, before);
}

#[test]
fn empty_explicit_scheme_assigns_nothing() {
    let mut config = chart("bar", 1, 1);
    assert!(assign_colors(&mut config, &opts(&[]), &PaletteTable::new()).is_none());
    assert_eq!(config.datasets()[0].background_color, None);
}
