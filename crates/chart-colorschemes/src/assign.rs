// File: crates/chart-colorschemes/src/assign.rs
// Summary: Assign scheme colors to dataset fields by chart kind, and restore the originals.

use chart_core::{ChartConfig, ChartType, ColorField, ColorSlot, ColorValue, Dataset, DatasetId, Rgba};
use log::{debug, trace, warn};
use std::collections::BTreeMap;

use crate::options::ColorSchemesOptions;
use crate::palette::PaletteTable;

/// Prior slots of the fields overwritten on one dataset, stored verbatim:
/// absent stays absent and an explicit null stays null on restore.
#[derive(Clone, Debug, Default, PartialEq)]
struct SavedFields(BTreeMap<ColorField, ColorSlot>);

#[derive(Clone, Debug, PartialEq)]
struct Record {
    dataset: DatasetId,
    fields: SavedFields,
}

/// Side table of overwritten fields, one record per dataset position.
/// Produced by [`apply_scheme`], consumed by [`restore`].
///
/// Records are keyed by position because cloned datasets share an id. The
/// id is kept alongside so a record is only put back into the dataset it
/// was taken from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedColors {
    records: BTreeMap<usize, Record>,
}

impl SavedColors {
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Number of datasets with a record (possibly one with no saved fields).
    pub fn len(&self) -> usize { self.records.len() }

    /// Whether the dataset at `position` has a record.
    pub fn contains(&self, position: usize) -> bool { self.records.contains_key(&position) }

    /// Whether `field` of the dataset at `position` was overwritten.
    pub fn overwrote(&self, position: usize, field: ColorField) -> bool {
        self.records.get(&position).is_some_and(|r| r.fields.0.contains_key(&field))
    }
}

/// Parameters that shape a single assignment pass.
#[derive(Clone, Copy, Debug)]
pub struct AssignParams {
    pub fill_alpha: f64,
    pub reverse: bool,
    pub override_colors: bool,
}

impl From<&ColorSchemesOptions> for AssignParams {
    fn from(o: &ColorSchemesOptions) -> Self {
        Self { fill_alpha: o.fill_alpha, reverse: o.reverse, override_colors: o.override_colors }
    }
}

/// Resolve the configured scheme and run the custom transform, if any.
/// `None` means "assign nothing": unknown name, or an empty final scheme.
pub fn working_scheme(options: &ColorSchemesOptions, palettes: &PaletteTable) -> Option<Vec<String>> {
    let Some(mut scheme) = options.scheme.resolve(palettes) else {
        debug!("scheme {:?} does not resolve; leaving colors untouched", options.scheme);
        return None;
    };
    if let Some(custom) = &options.custom {
        let mut copy = scheme.clone();
        scheme = match custom(&mut copy) {
            Some(result) if !result.is_empty() => result,
            _ => copy,
        };
    }
    if scheme.is_empty() {
        debug!("scheme is empty; leaving colors untouched");
        return None;
    }
    Some(scheme)
}

/// Pick the color for `position`, cycling through `scheme`.
pub fn pick(scheme: &[String], position: usize, reverse: bool) -> &str {
    let len = scheme.len();
    let index = position % len;
    &scheme[if reverse { len - index - 1 } else { index }]
}

/// `color` with its alpha replaced by `alpha`, as an `rgb[a](...)` string.
/// Colors that cannot be parsed are returned unchanged.
pub fn with_alpha(color: &str, alpha: f64) -> String {
    match Rgba::parse(color) {
        Ok(c) => c.alpha(alpha).rgb_string(),
        Err(e) => {
            warn!("cannot apply fill alpha: {e}");
            color.to_string()
        }
    }
}

/// Write scheme colors into every dataset of `config`. `scheme` must be non-empty.
pub fn apply_scheme(config: &mut ChartConfig, scheme: &[String], params: AssignParams) -> SavedColors {
    debug_assert!(!scheme.is_empty());
    let mut saved = SavedColors::default();
    let chart_type = config.chart_type.clone();

    for (position, dataset) in config.datasets_mut().iter_mut().enumerate() {
        let color = pick(scheme, position, params.reverse);
        let mut record = SavedFields::default();
        let kind = dataset.effective_type(&chart_type).clone();
        trace!("dataset {position} ({kind}) <- {color}");

        match kind {
            ChartType::Line | ChartType::Radar | ChartType::Scatter => {
                let fill = with_alpha(color, params.fill_alpha);
                set_field(dataset, &mut record, ColorField::BackgroundColor, fill.clone().into(), params);
                set_field(dataset, &mut record, ColorField::BorderColor, color.into(), params);
                set_field(dataset, &mut record, ColorField::PointBackgroundColor, fill.into(), params);
                set_field(dataset, &mut record, ColorField::PointBorderColor, color.into(), params);
            }
            ChartType::Doughnut | ChartType::Pie | ChartType::PolarArea => {
                let colors = (0..dataset.data.len())
                    .map(|i| pick(scheme, i, params.reverse).to_string())
                    .collect::<Vec<_>>();
                set_field(dataset, &mut record, ColorField::BackgroundColor, colors.into(), params);
            }
            _ => {
                set_field(dataset, &mut record, ColorField::BackgroundColor, color.into(), params);
            }
        }
        saved.records.insert(position, Record { dataset: dataset.id, fields: record });
    }
    saved
}

fn set_field(dataset: &mut Dataset, record: &mut SavedFields, field: ColorField, value: ColorValue, params: AssignParams) {
    let slot = dataset.color_mut(field);
    if slot.is_some() && !params.override_colors {
        return;
    }
    let prior = slot.replace(Some(value));
    record.0.insert(field, prior);
}

/// Resolve the scheme from `options` and apply it. `None` when nothing was assigned.
pub fn assign_colors(
    config: &mut ChartConfig,
    options: &ColorSchemesOptions,
    palettes: &PaletteTable,
) -> Option<SavedColors> {
    let scheme = working_scheme(options, palettes)?;
    Some(apply_scheme(config, &scheme, AssignParams::from(options)))
}

/// Put back every field recorded in `saved`. Datasets without a record, or
/// whose id no longer matches the record at their position, are left alone.
pub fn restore(config: &mut ChartConfig, mut saved: SavedColors) {
    for (position, dataset) in config.datasets_mut().iter_mut().enumerate() {
        let Some(record) = saved.records.remove(&position) else { continue };
        if record.dataset != dataset.id {
            debug!("dataset at {position} changed since assignment; skipping restore");
            continue;
        }
        for (field, prior) in record.fields.0 {
            *dataset.color_mut(field) = prior;
        }
    }
    if !saved.records.is_empty() {
        debug!("dropping {} saved record(s) for datasets no longer in the chart", saved.records.len());
    }
}
