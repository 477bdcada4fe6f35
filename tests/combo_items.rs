use xyplot_axes::data::axis_kind::{XAxisKind, YAxisKind};
use xyplot_axes::data::combo::ComboItems;

#[test]
fn keeps_order_and_indices_of_disabled_items() {
    let mut items = ComboItems::new(YAxisKind::ALL);
    assert!(items.set_enabled(YAxisKind::Phase, false));
    assert_eq!(items.len(), YAxisKind::ALL.len());
    assert_eq!(items.index_of(YAxisKind::Disabled), Some(0));
    assert_eq!(items.index_of(YAxisKind::Phase), Some(2));
    assert_eq!(items.get(2), Some((YAxisKind::Phase, false)));
    assert!(!items.is_enabled(YAxisKind::Phase));
    assert!(items.is_enabled(YAxisKind::Magnitude));
}

#[test]
fn set_enabled_on_missing_item_reports_false() {
    let mut items = ComboItems::new([YAxisKind::Disabled, YAxisKind::Magnitude]);
    assert!(!items.set_enabled(YAxisKind::Step, true));
    assert!(!items.is_enabled(YAxisKind::Step));
    assert_eq!(items.index_of(YAxisKind::Step), None);
}

#[test]
fn enabled_items_follow_list_order() {
    let items = ComboItems::from_fn(YAxisKind::ALL, |k| {
        matches!(k, YAxisKind::Step | YAxisKind::Disabled | YAxisKind::Impedance)
    });
    assert_eq!(
        items.enabled_items(),
        vec![YAxisKind::Disabled, YAxisKind::Step, YAxisKind::Impedance]
    );
    assert_eq!(items.iter().filter(|(_, e)| !*e).count(), 14);
}

#[test]
fn disabled_or_current_item_cannot_be_picked() {
    let items = ComboItems::from_fn(XAxisKind::ALL, |k| k.is_frequency());
    assert_eq!(items.pick(XAxisKind::Distance, XAxisKind::Frequency), Some(XAxisKind::Frequency));
    assert_eq!(items.pick(XAxisKind::Frequency, XAxisKind::Time), None);
    assert_eq!(items.pick(XAxisKind::Frequency, XAxisKind::Frequency), None);
}
