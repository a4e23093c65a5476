// File: crates/chart-colorschemes/src/lib.rs
// Summary: Color scheme plugin entry point; palette lookup, color assignment and lifecycle binding.

pub mod assign;
pub mod options;
pub mod palette;
pub mod plugin;
pub mod scheme;

pub use assign::{apply_scheme, assign_colors, restore, working_scheme, AssignParams, SavedColors};
pub use options::{ColorSchemesOptions, CustomFn, OptionsError, OptionsOverride, DEFAULT_FILL_ALPHA, DEFAULT_SCHEME};
pub use palette::{PaletteError, PaletteTable};
pub use plugin::{normalize_options, register, register_with, ColorSchemes, PLUGIN_ID};
pub use scheme::{legacy_name, SchemeRef};
