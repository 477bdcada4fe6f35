use std::collections::BTreeSet;

use xyplot_axes::data::axis_kind::{DataSourceKind, XAxisKind, YAxisKind};
use xyplot_axes::data::compat::*;

fn set(kinds: &[YAxisKind]) -> BTreeSet<YAxisKind> {
    kinds.iter().copied().collect()
}

#[test]
fn disabled_is_always_supported() {
    for source in DataSourceKind::ALL {
        for x in XAxisKind::ALL {
            assert!(
                supported_y_axis_kinds(source, x).contains(&YAxisKind::Disabled),
                "missing Disabled for {source} / {x}"
            );
        }
    }
    assert_eq!(YAxisKind::default(), YAxisKind::Disabled);
}

#[test]
fn vna_frequency_axis_offers_sweep_quantities() {
    let expected = set(&[
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
    ]);
    let freq = supported_y_axis_kinds(DataSourceKind::NetworkAnalyzer, XAxisKind::Frequency);
    assert_eq!(freq, expected);
    assert_eq!(freq.len(), 13);
    let power = supported_y_axis_kinds(DataSourceKind::NetworkAnalyzer, XAxisKind::Power);
    assert_eq!(power, expected);
}

#[test]
fn vna_time_and_distance_offer_time_domain_quantities() {
    let expected = set(&[
        YAxisKind::Disabled,
        YAxisKind::ImpulseReal,
        YAxisKind::ImpulseMagnitude,
        YAxisKind::Step,
        YAxisKind::Impedance,
    ]);
    for x in [XAxisKind::Time, XAxisKind::Distance] {
        assert_eq!(
            supported_y_axis_kinds(DataSourceKind::NetworkAnalyzer, x),
            expected
        );
    }
}

#[test]
fn spectrum_analyzer_only_plots_magnitude_over_frequency() {
    assert_eq!(
        supported_y_axis_kinds(DataSourceKind::SpectrumAnalyzer, XAxisKind::Frequency),
        set(&[YAxisKind::Disabled, YAxisKind::Magnitude])
    );
    for x in [XAxisKind::Time, XAxisKind::Distance, XAxisKind::Power] {
        assert_eq!(
            supported_y_axis_kinds(DataSourceKind::SpectrumAnalyzer, x),
            set(&[YAxisKind::Disabled])
        );
    }
}

#[test]
fn x_axis_selectability_per_source() {
    for x in XAxisKind::ALL {
        assert!(is_x_axis_selectable(DataSourceKind::NetworkAnalyzer, x));
        assert_eq!(
            is_x_axis_selectable(DataSourceKind::SpectrumAnalyzer, x),
            x == XAxisKind::Frequency
        );
    }
}

#[test]
fn repeated_queries_give_identical_sets() {
    for source in DataSourceKind::ALL {
        for x in XAxisKind::ALL {
            assert_eq!(
                supported_y_axis_kinds(source, x),
                supported_y_axis_kinds(source, x)
            );
        }
    }
}

#[test]
fn resolver_binds_source() {
    let r = AxisCompatibilityResolver::new(DataSourceKind::SpectrumAnalyzer);
    assert_eq!(r.selectable_x_axis_kinds(), vec![XAxisKind::Frequency]);
    assert!(r.is_y_axis_supported(XAxisKind::Frequency, YAxisKind::Magnitude));
    assert!(!r.is_y_axis_supported(XAxisKind::Frequency, YAxisKind::Phase));
    assert!(r.is_y_axis_supported(XAxisKind::Time, YAxisKind::Disabled));

    let vna = AxisCompatibilityResolver::new(DataSourceKind::NetworkAnalyzer);
    assert_eq!(vna.selectable_x_axis_kinds(), XAxisKind::ALL.to_vec());
}

#[test]
fn kind_names_round_trip() {
    for k in YAxisKind::ALL {
        assert_eq!(YAxisKind::from_name(k.name()), Some(k));
    }
    for k in XAxisKind::ALL {
        assert_eq!(XAxisKind::from_name(&k.to_string()), Some(k));
    }
    assert_eq!(YAxisKind::from_name("Resistance"), Some(YAxisKind::SeriesResistance));
    assert_eq!(YAxisKind::from_name("Voltage"), None);
}

#[test]
fn magnitude_unit_depends_on_source() {
    assert_eq!(YAxisKind::Magnitude.default_unit(DataSourceKind::NetworkAnalyzer), "dB");
    assert_eq!(YAxisKind::Magnitude.default_unit(DataSourceKind::SpectrumAnalyzer), "dBm");
    assert_eq!(YAxisKind::Impedance.default_unit(DataSourceKind::NetworkAnalyzer), "Ω");
    assert_eq!(XAxisKind::Distance.default_unit(), "m");
}
