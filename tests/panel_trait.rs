use xyplot_axes::data::axis_kind::{DataSourceKind, XAxisKind};
use xyplot_axes::data::plot::XyPlotAxes;
use xyplot_axes::panels::*;

fn run_frame(panel: &mut AxisDialogPanel, plot: &mut XyPlotAxes) -> AxisDialogAction {
    let ctx = egui::Context::default();
    let mut action = AxisDialogAction::None;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        action = panel.show(ctx, plot);
    });
    action
}

#[test]
fn axis_panel_starts_hidden_without_form() {
    let p = AxisDialogPanel::default();
    assert_eq!(p.name(), "Axes");
    assert!(!p.is_visible());
    assert!(p.form().is_none());
}

#[test]
fn open_snapshots_the_plot() {
    let plot = XyPlotAxes::new(DataSourceKind::SpectrumAnalyzer);
    let mut p = AxisDialogPanel::default();
    p.open(&plot);
    assert!(p.is_visible());
    let form = p.form().unwrap();
    assert_eq!(form.source(), DataSourceKind::SpectrumAnalyzer);
    assert_eq!(form.x_axis().kind, XAxisKind::Frequency);
}

#[test]
fn hidden_panel_does_nothing() {
    let mut plot = XyPlotAxes::new(DataSourceKind::NetworkAnalyzer);
    let mut p = AxisDialogPanel::default();
    assert_eq!(run_frame(&mut p, &mut plot), AxisDialogAction::None);
    assert!(p.form().is_none());
}

#[test]
fn visible_panel_opens_form_lazily_and_waits_for_user() {
    let mut plot = XyPlotAxes::new(DataSourceKind::NetworkAnalyzer);
    let mut p = AxisDialogPanel::default();
    p.state_mut().visible = true;
    assert_eq!(run_frame(&mut p, &mut plot), AxisDialogAction::None);
    assert!(p.form().is_some());
    assert_eq!(plot.revision(), 0);
}
