// File: crates/chart-colorschemes/src/options.rs
// Summary: Plugin options, defaults, and immutable merging of per-chart overrides.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::scheme::SchemeRef;

/// Scheme used when none is configured.
pub const DEFAULT_SCHEME: &str = "brewer.Paired12";
pub const DEFAULT_FILL_ALPHA: f64 = 0.5;

/// Custom transform over a copy of the resolved scheme. It may edit the copy
/// in place, return a replacement list, or both; a non-empty return wins.
pub type CustomFn = Arc<dyn Fn(&mut Vec<String>) -> Option<Vec<String>>>;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("plugin options must be an object, got {0}")]
    NotAnObject(Value),
    #[error("invalid plugin options: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct ColorSchemesOptions {
    pub scheme: SchemeRef,
    /// Transparency of fill colors, 0..=1.
    pub fill_alpha: f64,
    pub reverse: bool,
    /// Overwrite colors the dataset already has.
    pub override_colors: bool,
    pub custom: Option<CustomFn>,
    /// Reapply colors around interaction events, for hosts that rebuild
    /// element styles from the config on every event.
    pub hover_reset: bool,
}

impl Default for ColorSchemesOptions {
    fn default() -> Self {
        Self {
            scheme: SchemeRef::from(DEFAULT_SCHEME),
            fill_alpha: DEFAULT_FILL_ALPHA,
            reverse: false,
            override_colors: false,
            custom: None,
            hover_reset: false,
        }
    }
}

impl fmt::Debug for ColorSchemesOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSchemesOptions")
            .field("scheme", &self.scheme)
            .field("fill_alpha", &self.fill_alpha)
            .field("reverse", &self.reverse)
            .field("override_colors", &self.override_colors)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .field("hover_reset", &self.hover_reset)
            .finish()
    }
}

/// Per-chart overrides as they appear in the chart config (camelCase keys).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsOverride {
    pub scheme: Option<SchemeRef>,
    pub fill_alpha: Option<f64>,
    pub reverse: Option<bool>,
    #[serde(rename = "override")]
    pub override_colors: Option<bool>,
    pub hover_reset: Option<bool>,
}

impl ColorSchemesOptions {
    pub fn with_scheme(mut self, scheme: impl Into<SchemeRef>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_fill_alpha(mut self, fill_alpha: f64) -> Self {
        self.fill_alpha = fill_alpha;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_override(mut self, override_colors: bool) -> Self {
        self.override_colors = override_colors;
        self
    }

    pub fn with_custom<F>(mut self, custom: F) -> Self
    where
        F: Fn(&mut Vec<String>) -> Option<Vec<String>> + 'static,
    {
        self.custom = Some(Arc::new(custom));
        self
    }

    pub fn with_hover_reset(mut self, hover_reset: bool) -> Self {
        self.hover_reset = hover_reset;
        self
    }

    /// New options with `overrides` applied on top of `self`.
    pub fn merge(&self, overrides: &OptionsOverride) -> Self {
        Self {
            scheme: overrides.scheme.clone().unwrap_or_else(|| self.scheme.clone()),
            fill_alpha: overrides.fill_alpha.unwrap_or(self.fill_alpha),
            reverse: overrides.reverse.unwrap_or(self.reverse),
            override_colors: overrides.override_colors.unwrap_or(self.override_colors),
            custom: self.custom.clone(),
            hover_reset: overrides.hover_reset.unwrap_or(self.hover_reset),
        }
    }

    /// Merge a raw per-chart options value. `null` and `true` mean "defaults".
    pub fn merge_json(&self, value: &Value) -> Result<Self, OptionsError> {
        match value {
            Value::Null | Value::Bool(true) => Ok(self.clone()),
            Value::Object(_) => {
                let overrides = OptionsOverride::deserialize(value)?;
                Ok(self.merge(&overrides))
            }
            other => Err(OptionsError::NotAnObject(other.clone())),
        }
    }
}
