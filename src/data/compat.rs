//! Which axis quantities can be combined for a given data source.

use std::collections::BTreeSet;

use crate::data::axis_kind::{DataSourceKind, XAxisKind, YAxisKind};

/// Quantities derived from a frequency or power sweep.
const SWEEP_Y_AXES: [YAxisKind; 12] = [
    YAxisKind::Magnitude,
    YAxisKind::Phase,
    YAxisKind::UnwrappedPhase,
    YAxisKind::VSWR,
    YAxisKind::Real,
    YAxisKind::Imaginary,
    YAxisKind::SeriesResistance,
    YAxisKind::Reactance,
    YAxisKind::Capacitance,
    YAxisKind::Inductance,
    YAxisKind::QualityFactor,
    YAxisKind::GroupDelay,
];

/// Quantities derived from the time-domain transform.
const TIME_DOMAIN_Y_AXES: [YAxisKind; 4] = [
    YAxisKind::ImpulseReal,
    YAxisKind::ImpulseMagnitude,
    YAxisKind::Step,
    YAxisKind::Impedance,
];

/// Y-axis kinds that can be plotted against `x_axis` for data from `source`.
///
/// `Disabled` is always a member.
///
/// ```
/// # use xyplot_axes::data::axis_kind::{DataSourceKind, XAxisKind, YAxisKind};
/// # use xyplot_axes::data::compat::supported_y_axis_kinds;
/// let set = supported_y_axis_kinds(DataSourceKind::SpectrumAnalyzer, XAxisKind::Frequency);
/// assert!(set.contains(&YAxisKind::Magnitude));
/// assert!(!set.contains(&YAxisKind::Phase));
/// ```
pub fn supported_y_axis_kinds(source: DataSourceKind, x_axis: XAxisKind) -> BTreeSet<YAxisKind> {
    let mut ret = BTreeSet::from([YAxisKind::Disabled]);
    match source {
        DataSourceKind::NetworkAnalyzer => match x_axis {
            XAxisKind::Frequency | XAxisKind::Power => ret.extend(SWEEP_Y_AXES),
            XAxisKind::Time | XAxisKind::Distance => ret.extend(TIME_DOMAIN_Y_AXES),
        },
        DataSourceKind::SpectrumAnalyzer => {
            if x_axis == XAxisKind::Frequency {
                ret.insert(YAxisKind::Magnitude);
            }
        }
    }
    ret
}

/// Whether `x_axis` may be selected at all for data from `source`.
pub fn is_x_axis_selectable(source: DataSourceKind, x_axis: XAxisKind) -> bool {
    match source {
        DataSourceKind::NetworkAnalyzer => true,
        DataSourceKind::SpectrumAnalyzer => x_axis == XAxisKind::Frequency,
    }
}

/// Both compatibility queries bound to a fixed data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCompatibilityResolver {
    pub source: DataSourceKind,
}

impl AxisCompatibilityResolver {
    pub fn new(source: DataSourceKind) -> Self {
        Self { source }
    }

    pub fn supported_y_axis_kinds(&self, x_axis: XAxisKind) -> BTreeSet<YAxisKind> {
        supported_y_axis_kinds(self.source, x_axis)
    }

    pub fn is_x_axis_selectable(&self, x_axis: XAxisKind) -> bool {
        is_x_axis_selectable(self.source, x_axis)
    }

    pub fn is_y_axis_supported(&self, x_axis: XAxisKind, y_axis: YAxisKind) -> bool {
        y_axis.is_disabled() || self.supported_y_axis_kinds(x_axis).contains(&y_axis)
    }

    /// Selectable X-axis kinds in combo-box order.
    pub fn selectable_x_axis_kinds(&self) -> Vec<XAxisKind> {
        XAxisKind::ALL
            .into_iter()
            .filter(|k| self.is_x_axis_selectable(*k))
            .collect()
    }
}
