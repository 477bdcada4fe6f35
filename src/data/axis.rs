use serde::{Deserialize, Serialize};

use crate::data::axis_kind::{XAxisKind, YAxisKind};

/// One Y axis of an XY plot.
///
/// When `auto_range` is set the range fields are not used for display, but
/// they are kept as entered so that switching auto-range off restores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisRangeConfig {
    pub kind: YAxisKind,
    pub use_log_scale: bool,
    pub auto_range: bool,
    pub range_min: f64,
    pub range_max: f64,
    pub range_division_count: f64,
    pub unit: String,
}

impl Default for AxisRangeConfig {
    fn default() -> Self {
        Self {
            kind: YAxisKind::Disabled,
            use_log_scale: false,
            auto_range: true,
            range_min: -1.0,
            range_max: 1.0,
            range_division_count: 1.0,
            unit: String::new(),
        }
    }
}

impl AxisRangeConfig {
    pub fn with_kind(kind: YAxisKind, unit: impl Into<String>) -> Self {
        Self {
            kind,
            unit: unit.into(),
            ..Default::default()
        }
    }

    /// Range used for display, `None` while auto-ranging or disabled.
    pub fn manual_range(&self) -> Option<(f64, f64)> {
        if self.auto_range || self.kind.is_disabled() {
            None
        } else {
            Some((self.range_min, self.range_max))
        }
    }
}

/// How the X axis bounds are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XAxisMode {
    /// Follow the instrument's sweep span. Frequency axes only.
    UseSpan,
    /// Fit the bounds to the data of all traces.
    FitTraces,
    /// User-specified min/max/divisions.
    Manual,
}

impl XAxisMode {
    pub fn is_auto(&self) -> bool {
        !matches!(self, XAxisMode::Manual)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisConfig {
    pub kind: XAxisKind,
    pub mode: XAxisMode,
    pub use_log_scale: bool,
    pub range_min: f64,
    pub range_max: f64,
    pub range_division_count: f64,
}

impl Default for XAxisConfig {
    fn default() -> Self {
        Self {
            kind: XAxisKind::Frequency,
            mode: XAxisMode::UseSpan,
            use_log_scale: false,
            range_min: 0.0,
            range_max: 6e9,
            range_division_count: 500e6,
        }
    }
}

/// Complete axis configuration of one XY plot: one X axis and two Y axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotAxisSettings {
    pub x_axis: XAxisConfig,
    pub y_axis: [AxisRangeConfig; 2],
}

impl Default for PlotAxisSettings {
    fn default() -> Self {
        let mut y1 = AxisRangeConfig::with_kind(YAxisKind::Magnitude, "dB");
        y1.range_min = -120.0;
        y1.range_max = 20.0;
        y1.range_division_count = 10.0;
        let mut y2 = AxisRangeConfig::with_kind(YAxisKind::Phase, "°");
        y2.range_min = -180.0;
        y2.range_max = 180.0;
        y2.range_division_count = 30.0;
        Self {
            x_axis: XAxisConfig::default(),
            y_axis: [y1, y2],
        }
    }
}
