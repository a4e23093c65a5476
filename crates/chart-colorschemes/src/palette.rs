// File: crates/chart-colorschemes/src/palette.rs
// Summary: Two-level palette table (category -> variant -> colors) plus a built-in set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid palette table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Static lookup table of named schemes, e.g. `brewer` / `Paired12`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteTable {
    categories: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl PaletteTable {
    pub fn new() -> Self { Self::default() }

    /// Load a table shaped like `{"brewer": {"Paired12": ["#a6cee3", ...]}}`.
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert<I, S>(&mut self, category: &str, variant: &str, colors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(variant.to_string(), colors.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, category: &str, variant: &str) -> Option<&[String]> {
        self.categories.get(category)?.get(variant).map(Vec::as_slice)
    }

    /// All `category.variant` names in the table.
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.categories
            .iter()
            .flat_map(|(c, vs)| vs.keys().map(move |v| format!("{c}.{v}")))
    }

    pub fn is_empty(&self) -> bool { self.categories.values().all(BTreeMap::is_empty) }

    /// ColorBrewer qualitative sets, Tableau and Office palettes.
    pub fn builtin() -> Self {
        let mut t = Self::new();
        for (name, colors) in BREWER_QUALITATIVE {
            // Qualitative brewer sets of size n are the first n colors of the largest set.
            for n in 3..=colors.len() {
                t.insert("brewer", &format!("{name}{n}"), colors[..n].iter().copied());
            }
        }
        t.insert("tableau", "Tableau10", TABLEAU10.iter().copied());
        t.insert("tableau", "Classic10", CLASSIC10.iter().copied());
        t.insert("office", "OfficeClassic6", OFFICE_CLASSIC6.iter().copied());
        t.insert("office", "Office6", OFFICE6.iter().copied());
        t
    }
}

const BREWER_QUALITATIVE: &[(&str, &[&str])] = &[
    ("Accent", &["#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17", "#666666"]),
    ("DarkTwo", &["#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666"]),
    (
        "Paired",
        &[
            "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00",
            "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
        ],
    ),
    ("PastelOne", &["#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd", "#fddaec", "#f2f2f2"]),
    ("PastelTwo", &["#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9", "#fff2ae", "#f1e2cc", "#cccccc"]),
    ("SetOne", &["#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf", "#999999"]),
    ("SetTwo", &["#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3"]),
    (
        "SetThree",
        &[
            "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
            "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
        ],
    ),
];

const TABLEAU10: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7", "#9c755f", "#bab0ac",
];

const CLASSIC10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

const OFFICE_CLASSIC6: &[&str] = &["#4f81bd", "#c0504d", "#9bbb59", "#8064a2", "#4bacc6", "#f79646"];

const OFFICE6: &[&str] = &["#5b9bd5", "#ed7d31", "#a5a5a5", "#ffc000", "#4472c4", "#70ad47"];
