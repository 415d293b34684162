//! Theme system for portfolio rendering
//!
//! Each portfolio picks a template and a color/typography configuration.
//! This module turns the stored choice into:
//! - a resolved [`ThemeOptions`] with a complete [`ColorPalette`]
//! - a customized copy of the template's style sheet
//! - a [`StyleContext`] that shared components read their styles from

pub mod color;
pub mod context;
pub mod font_link;
pub mod fonts;
pub mod options;
pub mod palette;
pub mod presets;
pub mod registry;
pub mod stylesheet;

pub use context::StyleContext;
pub use fonts::{FontPair, FontSpec, DEFAULT_FONT_ID};
pub use options::{resolve, OptionsPatch, ThemeOptions, DEFAULT_THEME_ID};
pub use palette::{derive, ColorPalette, PaletteVariation};
pub use registry::{TemplateDefinition, TemplateError, TemplateRegistry, TemplateSummary};
pub use stylesheet::{customize, StyleSheet, StyleSheetError, StyleToken};
