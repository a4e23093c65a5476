// File: crates/chart-colorschemes/src/scheme.rs
// Summary: Scheme references and their resolution against a palette table.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::palette::PaletteTable;

/// Either explicit colors or a `category.variant` name. Anything else the
/// config may hold is kept as `Other` and never resolves; that includes
/// arrays with non-string entries, which cannot be used as colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemeRef {
    Colors(Vec<String>),
    Named(String),
    Other(Value),
}

impl From<&str> for SchemeRef {
    fn from(s: &str) -> Self { SchemeRef::Named(s.to_string()) }
}

impl From<Vec<String>> for SchemeRef {
    fn from(v: Vec<String>) -> Self { SchemeRef::Colors(v) }
}

impl From<&[&str]> for SchemeRef {
    fn from(v: &[&str]) -> Self { SchemeRef::Colors(v.iter().map(|s| s.to_string()).collect()) }
}

impl SchemeRef {
    /// Resolve to an ordered color list; `None` when the name is unknown.
    pub fn resolve(&self, palettes: &PaletteTable) -> Option<Vec<String>> {
        match self {
            SchemeRef::Colors(colors) => Some(colors.clone()),
            SchemeRef::Named(name) => {
                let name = legacy_name(name);
                let (category, variant) = name.split_once('.')?;
                palettes.get(category, variant).map(<[String]>::to_vec)
            }
            SchemeRef::Other(_) => None,
        }
    }
}

fn legacy_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\w+\.\w+)([1-3])-(\d+)$").expect("static pattern"))
}

/// Rewrite old-style names: `brewer.Set1-9` -> `brewer.SetOne9`,
/// `office.Office2007-2010-6` -> `office.OfficeClassic6`.
pub fn legacy_name(name: &str) -> Cow<'_, str> {
    if let Some(caps) = legacy_pattern().captures(name) {
        let ordinal = match &caps[2] {
            "1" => "One",
            "2" => "Two",
            _ => "Three",
        };
        return Cow::Owned(format!("{}{}{}", &caps[1], ordinal, &caps[3]));
    }
    if name == "office.Office2007-2010-6" {
        return Cow::Borrowed("office.OfficeClassic6");
    }
    Cow::Borrowed(name)
}
