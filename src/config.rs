//! Configuration of the axis settings dialog.

use crate::data::si_value::{SiPrefixes, SiValueError};

// ─────────────────────────────────────────────────────────────────────────────
// Range field formatting
// ─────────────────────────────────────────────────────────────────────────────

/// How min/max/division values are shown and entered.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeFieldConfig {
    /// Allowed SI prefixes, a space meaning "no prefix". Default: `"pnum kMG"`.
    pub prefixes: String,
    /// Significant digits shown for values. Default: `6`.
    pub precision: usize,
    /// Width of a range text field in points. Default: `90.0`.
    pub field_width: f32,
}

impl Default for RangeFieldConfig {
    fn default() -> Self {
        Self {
            prefixes: "pnum kMG".to_string(),
            precision: 6,
            field_width: 90.0,
        }
    }
}

impl RangeFieldConfig {
    pub fn si_prefixes(&self) -> Result<SiPrefixes, SiValueError> {
        SiPrefixes::parse(&self.prefixes)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AxisDialogConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the axis dialog.
///
/// | Field               | Purpose |
/// |---------------------|---------|
/// | `title`             | Window title of the dialog |
/// | `range_fields`      | Prefixes and precision of min/max/div fields |
/// | `max_visible_items` | Rows shown by an opened kind combo box |
/// | `native_options`    | eframe options used by the demo binary |
#[derive(Clone)]
pub struct AxisDialogConfig {
    /// Dialog window title.
    pub title: String,
    pub range_fields: RangeFieldConfig,
    /// Default: `20`, enough to show every Y-axis kind without scrolling.
    pub max_visible_items: usize,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for AxisDialogConfig {
    fn default() -> Self {
        Self {
            title: "Axis Setup".to_string(),
            range_fields: RangeFieldConfig::default(),
            max_visible_items: 20,
            native_options: None,
        }
    }
}
