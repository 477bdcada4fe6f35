//! Top-level entry point for running the axis dialog demo as a native window.

use eframe::egui;

use crate::config::AxisDialogConfig;
use crate::data::axis_kind::DataSourceKind;

use super::AxisDemoApp;

/// Open a native window with a plot fed by `source` and its axis dialog.
///
/// The call blocks until the window is closed.
pub fn run_axis_demo(source: DataSourceKind, mut cfg: AxisDialogConfig) -> eframe::Result<()> {
    let title = format!("{} ({})", cfg.title, source);
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(900.0, 500.0));
    }

    let app = AxisDemoApp::new(source, cfg);
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
