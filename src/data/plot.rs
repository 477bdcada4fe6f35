//! The owning plot side of the axis dialog.

use crate::data::axis::PlotAxisSettings;
use crate::data::axis_kind::{DataSourceKind, XAxisKind, YAxisKind};

/// What the axis dialog needs from the plot that owns the axes.
pub trait AxisPlotHost {
    fn source(&self) -> DataSourceKind;

    /// Snapshot of the current axis configuration.
    fn axis_settings(&self) -> PlotAxisSettings;

    /// Replace the whole axis configuration in one step.
    fn commit_axes(&mut self, settings: PlotAxisSettings);

    fn x_axis_unit(&self, kind: XAxisKind) -> String {
        kind.default_unit().to_string()
    }

    fn y_axis_unit(&self, kind: YAxisKind) -> String {
        kind.default_unit(self.source()).to_string()
    }
}

/// Axis state of a single XY trace plot.
#[derive(Debug, Clone)]
pub struct XyPlotAxes {
    source: DataSourceKind,
    settings: PlotAxisSettings,
    revision: u64,
}

impl XyPlotAxes {
    /// A plot with default axes for `source`.
    ///
    /// Spectrum analyzers only measure magnitude over frequency, so their
    /// second Y axis starts disabled and the magnitude unit is dBm.
    pub fn new(source: DataSourceKind) -> Self {
        let mut settings = PlotAxisSettings::default();
        if source == DataSourceKind::SpectrumAnalyzer {
            settings.y_axis[1].kind = YAxisKind::Disabled;
            settings.y_axis[1].unit.clear();
        }
        for y in settings.y_axis.iter_mut() {
            y.unit = y.kind.default_unit(source).to_string();
        }
        Self {
            source,
            settings,
            revision: 0,
        }
    }

    pub fn settings(&self) -> &PlotAxisSettings {
        &self.settings
    }

    /// Number of commits applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl AxisPlotHost for XyPlotAxes {
    fn source(&self) -> DataSourceKind {
        self.source
    }

    fn axis_settings(&self) -> PlotAxisSettings {
        self.settings.clone()
    }

    fn commit_axes(&mut self, settings: PlotAxisSettings) {
        log::debug!(
            "committing axes: x={} y1={} y2={}",
            settings.x_axis.kind,
            settings.y_axis[0].kind,
            settings.y_axis[1].kind
        );
        self.settings = settings;
        self.revision += 1;
    }
}
