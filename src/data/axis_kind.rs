//! Axis quantity enumerations: data sources, X-axis kinds and Y-axis kinds.
//!
//! Each enum carries an `ALL` table in combo-box order, a display name and a
//! default unit string. The order of `ALL` is the order items appear in the
//! axis dialog.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// DataSourceKind
// ─────────────────────────────────────────────────────────────────────────────

/// Instrument class that produced the data feeding a plot.
///
/// Fixed for the lifetime of a plot; it constrains which quantities can be
/// measured and therefore plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSourceKind {
    NetworkAnalyzer,
    SpectrumAnalyzer,
}

impl DataSourceKind {
    pub const ALL: [DataSourceKind; 2] = [
        DataSourceKind::NetworkAnalyzer,
        DataSourceKind::SpectrumAnalyzer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DataSourceKind::NetworkAnalyzer => "VNA",
            DataSourceKind::SpectrumAnalyzer => "SA",
        }
    }
}

impl std::fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// XAxisKind
// ─────────────────────────────────────────────────────────────────────────────

/// Independent variable of an XY plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum XAxisKind {
    Frequency,
    Time,
    Distance,
    Power,
}

impl XAxisKind {
    /// All kinds in combo-box order.
    pub const ALL: [XAxisKind; 4] = [
        XAxisKind::Frequency,
        XAxisKind::Time,
        XAxisKind::Distance,
        XAxisKind::Power,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            XAxisKind::Frequency => "Frequency",
            XAxisKind::Time => "Time",
            XAxisKind::Distance => "Distance",
            XAxisKind::Power => "Power",
        }
    }

    /// Inverse of [`XAxisKind::name`].
    ///
    /// ```
    /// # use xyplot_axes::data::axis_kind::XAxisKind;
    /// assert_eq!(XAxisKind::from_name("Power"), Some(XAxisKind::Power));
    /// assert_eq!(XAxisKind::from_name("Voltage"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<XAxisKind> {
        XAxisKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Default unit string shown next to range fields.
    pub fn default_unit(&self) -> &'static str {
        match self {
            XAxisKind::Frequency => "Hz",
            XAxisKind::Time => "s",
            XAxisKind::Distance => "m",
            XAxisKind::Power => "dBm",
        }
    }

    /// Span-based auto range and log scale only make sense on a frequency axis.
    pub fn is_frequency(&self) -> bool {
        matches!(self, XAxisKind::Frequency)
    }
}

impl std::fmt::Display for XAxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// YAxisKind
// ─────────────────────────────────────────────────────────────────────────────

/// Dependent quantity displayed on a Y axis. `Disabled` hides the axis.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum YAxisKind {
    #[default]
    Disabled,
    Magnitude,
    Phase,
    UnwrappedPhase,
    VSWR,
    Real,
    Imaginary,
    SeriesResistance,
    Reactance,
    Capacitance,
    Inductance,
    QualityFactor,
    GroupDelay,
    ImpulseReal,
    ImpulseMagnitude,
    Step,
    Impedance,
}

impl YAxisKind {
    /// All kinds in combo-box order, `Disabled` first.
    pub const ALL: [YAxisKind; 17] = [
        YAxisKind::Disabled,
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
        YAxisKind::ImpulseReal,
        YAxisKind::ImpulseMagnitude,
        YAxisKind::Step,
        YAxisKind::Impedance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            YAxisKind::Disabled => "Disabled",
            YAxisKind::Magnitude => "Magnitude",
            YAxisKind::Phase => "Phase",
            YAxisKind::UnwrappedPhase => "Unwrapped Phase",
            YAxisKind::VSWR => "VSWR",
            YAxisKind::Real => "Real",
            YAxisKind::Imaginary => "Imaginary",
            YAxisKind::SeriesResistance => "Resistance",
            YAxisKind::Reactance => "Reactance",
            YAxisKind::Capacitance => "Capacitance",
            YAxisKind::Inductance => "Inductance",
            YAxisKind::QualityFactor => "Quality Factor",
            YAxisKind::GroupDelay => "Group delay",
            YAxisKind::ImpulseReal => "Impulse Response (Real)",
            YAxisKind::ImpulseMagnitude => "Impulse Response (Magnitude)",
            YAxisKind::Step => "Step Response",
            YAxisKind::Impedance => "Impedance",
        }
    }

    /// Inverse of [`YAxisKind::name`].
    pub fn from_name(name: &str) -> Option<YAxisKind> {
        YAxisKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Default unit for this quantity. Spectrum analyzers report absolute
    /// power, so their magnitude is in dBm rather than dB.
    pub fn default_unit(&self, source: DataSourceKind) -> &'static str {
        match self {
            YAxisKind::Magnitude => match source {
                DataSourceKind::NetworkAnalyzer => "dB",
                DataSourceKind::SpectrumAnalyzer => "dBm",
            },
            YAxisKind::Phase | YAxisKind::UnwrappedPhase => "°",
            YAxisKind::SeriesResistance | YAxisKind::Reactance | YAxisKind::Impedance => "Ω",
            YAxisKind::Capacitance => "F",
            YAxisKind::Inductance => "H",
            YAxisKind::GroupDelay => "s",
            YAxisKind::ImpulseMagnitude => "dB",
            YAxisKind::Disabled
            | YAxisKind::VSWR
            | YAxisKind::Real
            | YAxisKind::Imaginary
            | YAxisKind::QualityFactor
            | YAxisKind::ImpulseReal
            | YAxisKind::Step => "",
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, YAxisKind::Disabled)
    }
}

impl std::fmt::Display for YAxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
