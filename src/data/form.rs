//! Edit buffer and enablement rules of the axis settings dialog.
//!
//! [`AxisConfigForm`] holds the value of every field while the dialog is open.
//! All selection changes go through its methods, which keep the buffer
//! consistent (no Y axis ever holds a kind the current X axis cannot show).
//! Which widgets are enabled is never stored: it is recomputed from the
//! buffer by [`AxisConfigForm::derive_form_state`] after every edit.
//!
//! Nothing reaches the owning plot until [`AxisConfigForm::accept`]; dropping
//! the form (or calling [`AxisConfigForm::cancel`]) discards all edits.

use std::collections::BTreeSet;

use crate::data::axis::{AxisRangeConfig, PlotAxisSettings, XAxisConfig, XAxisMode};
use crate::data::axis_kind::{DataSourceKind, XAxisKind, YAxisKind};
use crate::data::combo::ComboItems;
use crate::data::compat::AxisCompatibilityResolver;
use crate::data::plot::AxisPlotHost;

/// Auto-range submode offered while the X auto checkbox is ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XAutoMode {
    UseSpan,
    FitTraces,
}

impl XAutoMode {
    pub const ALL: [XAutoMode; 2] = [XAutoMode::UseSpan, XAutoMode::FitTraces];

    pub fn name(&self) -> &'static str {
        match self {
            XAutoMode::UseSpan => "Use Span",
            XAutoMode::FitTraces => "Fit Traces",
        }
    }
}

impl std::fmt::Display for XAutoMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identifies one of the two Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YAxisId {
    Y1,
    Y2,
}

impl YAxisId {
    pub const ALL: [YAxisId; 2] = [YAxisId::Y1, YAxisId::Y2];

    pub fn index(&self) -> usize {
        match self {
            YAxisId::Y1 => 0,
            YAxisId::Y2 => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            YAxisId::Y1 => "Primary Y axis",
            YAxisId::Y2 => "Secondary Y axis",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct XAxisFields {
    pub kind: XAxisKind,
    pub use_log_scale: bool,
    pub auto_range: bool,
    pub auto_mode: XAutoMode,
    pub range_min: f64,
    pub range_max: f64,
    pub range_division_count: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YAxisFields {
    pub kind: YAxisKind,
    pub use_log_scale: bool,
    pub auto_range: bool,
    pub range_min: f64,
    pub range_max: f64,
    pub range_division_count: f64,
}

impl From<&AxisRangeConfig> for YAxisFields {
    fn from(a: &AxisRangeConfig) -> Self {
        Self {
            kind: a.kind,
            use_log_scale: a.use_log_scale,
            auto_range: a.auto_range,
            range_min: a.range_min,
            range_max: a.range_max,
            range_division_count: a.range_division_count,
        }
    }
}

impl From<&XAxisConfig> for XAxisFields {
    fn from(x: &XAxisConfig) -> Self {
        Self {
            kind: x.kind,
            use_log_scale: x.use_log_scale,
            auto_range: x.mode.is_auto(),
            auto_mode: if x.mode == XAxisMode::UseSpan {
                XAutoMode::UseSpan
            } else {
                XAutoMode::FitTraces
            },
            range_min: x.range_min,
            range_max: x.range_max,
            range_division_count: x.range_division_count,
        }
    }
}

impl XAxisFields {
    pub fn mode(&self) -> XAxisMode {
        match (self.auto_range, self.auto_mode) {
            (false, _) => XAxisMode::Manual,
            (true, XAutoMode::UseSpan) => XAxisMode::UseSpan,
            (true, XAutoMode::FitTraces) => XAxisMode::FitTraces,
        }
    }
}

/// Unit strings captured from the owning plot when the form is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UnitTable {
    x: Vec<(XAxisKind, String)>,
    y: Vec<(YAxisKind, String)>,
}

impl UnitTable {
    fn defaults(source: DataSourceKind) -> Self {
        Self {
            x: XAxisKind::ALL
                .into_iter()
                .map(|k| (k, k.default_unit().to_string()))
                .collect(),
            y: YAxisKind::ALL
                .into_iter()
                .map(|k| (k, k.default_unit(source).to_string()))
                .collect(),
        }
    }

    fn from_host(host: &impl AxisPlotHost) -> Self {
        Self {
            x: XAxisKind::ALL
                .into_iter()
                .map(|k| (k, host.x_axis_unit(k)))
                .collect(),
            y: YAxisKind::ALL
                .into_iter()
                .map(|k| (k, host.y_axis_unit(k)))
                .collect(),
        }
    }

    fn x_unit(&self, kind: XAxisKind) -> &str {
        self.x
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, u)| u.as_str())
            .unwrap_or("")
    }

    fn y_unit(&self, kind: YAxisKind) -> &str {
        self.y
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, u)| u.as_str())
            .unwrap_or("")
    }
}

/// Enablement of the widgets belonging to one Y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct YAxisEnablement {
    pub kind_items: ComboItems<YAxisKind>,
    /// Linear/log choice.
    pub scale_enabled: bool,
    pub auto_enabled: bool,
    /// Min, max and divisions.
    pub range_enabled: bool,
    pub unit: String,
}

/// Everything the dialog shows that is derived rather than edited.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedEnablement {
    pub x_kind_items: ComboItems<XAxisKind>,
    pub x_auto_mode_items: ComboItems<XAutoMode>,
    pub x_log_enabled: bool,
    pub x_auto_mode_enabled: bool,
    pub x_range_enabled: bool,
    pub x_divisions_enabled: bool,
    pub x_unit: String,
    pub y: [YAxisEnablement; 2],
}

impl DerivedEnablement {
    pub fn y_axis(&self, id: YAxisId) -> &YAxisEnablement {
        &self.y[id.index()]
    }
}

/// Local edit buffer of the axis dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfigForm {
    resolver: AxisCompatibilityResolver,
    units: UnitTable,
    x: XAxisFields,
    y: [YAxisFields; 2],
}

impl AxisConfigForm {
    /// Snapshot the plot's current axes into a new edit buffer.
    pub fn open(host: &impl AxisPlotHost) -> Self {
        let settings = host.axis_settings();
        Self::build(host.source(), UnitTable::from_host(host), &settings)
    }

    /// Edit buffer for `settings` using the default unit table.
    pub fn from_settings(source: DataSourceKind, settings: &PlotAxisSettings) -> Self {
        Self::build(source, UnitTable::defaults(source), settings)
    }

    fn build(source: DataSourceKind, units: UnitTable, settings: &PlotAxisSettings) -> Self {
        let mut form = Self {
            resolver: AxisCompatibilityResolver::new(source),
            units,
            x: XAxisFields::from(&settings.x_axis),
            y: [
                YAxisFields::from(&settings.y_axis[0]),
                YAxisFields::from(&settings.y_axis[1]),
            ],
        };
        if !form.resolver.is_x_axis_selectable(form.x.kind) {
            log::warn!("x axis {} is not offered for {} data", form.x.kind, source);
        }
        form.apply_x_kind_rules();
        form
    }

    pub fn source(&self) -> DataSourceKind {
        self.resolver.source
    }

    pub fn x_axis(&self) -> &XAxisFields {
        &self.x
    }

    pub fn y_axis(&self, id: YAxisId) -> &YAxisFields {
        &self.y[id.index()]
    }

    pub fn supported_y_axis_kinds(&self) -> BTreeSet<YAxisKind> {
        self.resolver.supported_y_axis_kinds(self.x.kind)
    }

    /// Change the X axis kind.
    ///
    /// Y axes showing a quantity the new kind cannot provide are reset to
    /// `Disabled`. Leaving the frequency axis also drops span-based auto range
    /// and log scale.
    ///
    /// Kinds the data source does not offer are disabled in
    /// [`DerivedEnablement::x_kind_items`]; this method does not refuse them,
    /// it only leaves every Y axis `Disabled`.
    pub fn select_x_kind(&mut self, kind: XAxisKind) {
        if !self.resolver.is_x_axis_selectable(kind) {
            log::debug!("x axis {} selected for {} data", kind, self.source());
        }
        self.x.kind = kind;
        self.apply_x_kind_rules();
    }

    fn apply_x_kind_rules(&mut self) {
        let supported = self.supported_y_axis_kinds();
        for (i, y) in self.y.iter_mut().enumerate() {
            if !supported.contains(&y.kind) {
                log::debug!("y axis {} reset: {} unsupported on {}", i + 1, y.kind, self.x.kind);
                y.kind = YAxisKind::Disabled;
            }
        }
        if !self.x.kind.is_frequency() {
            if self.x.auto_mode == XAutoMode::UseSpan {
                self.x.auto_mode = XAutoMode::FitTraces;
            }
            self.x.use_log_scale = false;
        }
    }

    /// Returns `false` if `kind` cannot be shown against the current X axis.
    pub fn select_y_kind(&mut self, id: YAxisId, kind: YAxisKind) -> bool {
        if !self.resolver.is_y_axis_supported(self.x.kind, kind) {
            log::debug!("ignoring y axis {} on {}", kind, self.x.kind);
            return false;
        }
        self.y[id.index()].kind = kind;
        true
    }

    pub fn set_y_log(&mut self, id: YAxisId, log: bool) {
        self.y[id.index()].use_log_scale = log;
    }

    pub fn set_y_auto(&mut self, id: YAxisId, auto_range: bool) {
        self.y[id.index()].auto_range = auto_range;
    }

    pub fn set_y_range(&mut self, id: YAxisId, min: f64, max: f64, divisions: f64) {
        let y = &mut self.y[id.index()];
        y.range_min = min;
        y.range_max = max;
        y.range_division_count = divisions;
    }

    pub fn set_x_auto(&mut self, auto_range: bool) {
        self.x.auto_range = auto_range;
    }

    /// Span-based auto range is only accepted on a frequency axis.
    pub fn set_x_auto_mode(&mut self, mode: XAutoMode) -> bool {
        if mode == XAutoMode::UseSpan && !self.x.kind.is_frequency() {
            return false;
        }
        self.x.auto_mode = mode;
        true
    }

    /// Log scale is only accepted on a frequency axis.
    pub fn set_x_log(&mut self, log: bool) -> bool {
        if log && !self.x.kind.is_frequency() {
            return false;
        }
        self.x.use_log_scale = log;
        true
    }

    pub fn set_x_range(&mut self, min: f64, max: f64, divisions: f64) {
        self.x.range_min = min;
        self.x.range_max = max;
        self.x.range_division_count = divisions;
    }

    pub fn x_unit(&self) -> &str {
        self.units.x_unit(self.x.kind)
    }

    pub fn y_unit(&self, id: YAxisId) -> &str {
        self.units.y_unit(self.y[id.index()].kind)
    }

    /// Compute the enabled state of every widget from the current buffer.
    pub fn derive_form_state(&self) -> DerivedEnablement {
        let supported = self.supported_y_axis_kinds();
        let is_frequency = self.x.kind.is_frequency();
        let y_state = |id: YAxisId| {
            let y = &self.y[id.index()];
            let active = !y.kind.is_disabled();
            YAxisEnablement {
                kind_items: ComboItems::from_fn(YAxisKind::ALL, |k| supported.contains(&k)),
                scale_enabled: active,
                auto_enabled: active,
                range_enabled: active && !y.auto_range,
                unit: self.units.y_unit(y.kind).to_string(),
            }
        };
        DerivedEnablement {
            x_kind_items: ComboItems::from_fn(XAxisKind::ALL, |k| {
                self.resolver.is_x_axis_selectable(k)
            }),
            x_auto_mode_items: ComboItems::from_fn(XAutoMode::ALL, |m| {
                m != XAutoMode::UseSpan || is_frequency
            }),
            x_log_enabled: is_frequency,
            x_auto_mode_enabled: self.x.auto_range,
            x_range_enabled: !self.x.auto_range,
            x_divisions_enabled: !self.x.auto_range && !self.x.use_log_scale,
            x_unit: self.x_unit().to_string(),
            y: [y_state(YAxisId::Y1), y_state(YAxisId::Y2)],
        }
    }

    /// The configuration the buffer currently describes.
    pub fn to_settings(&self) -> PlotAxisSettings {
        let y_config = |y: &YAxisFields| AxisRangeConfig {
            kind: y.kind,
            use_log_scale: y.use_log_scale,
            auto_range: y.auto_range,
            range_min: y.range_min,
            range_max: y.range_max,
            range_division_count: y.range_division_count,
            unit: self.units.y_unit(y.kind).to_string(),
        };
        PlotAxisSettings {
            x_axis: XAxisConfig {
                kind: self.x.kind,
                mode: self.x.mode(),
                use_log_scale: self.x.use_log_scale,
                range_min: self.x.range_min,
                range_max: self.x.range_max,
                range_division_count: self.x.range_division_count,
            },
            y_axis: [y_config(&self.y[0]), y_config(&self.y[1])],
        }
    }

    /// Write the edited configuration back to the plot in one commit.
    pub fn accept(self, host: &mut impl AxisPlotHost) {
        host.commit_axes(self.to_settings());
    }

    /// Discard all edits.
    pub fn cancel(self) {
        log::debug!("axis dialog cancelled");
    }
}
