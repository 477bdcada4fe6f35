//! Standalone window hosting one plot's axes and the axis dialog.
//!
//! [`AxisDemoApp`] implements [`eframe::App`]. It shows the committed axis
//! configuration as text; drawing the traces is left to the embedding
//! application.

use eframe::egui;

use crate::config::AxisDialogConfig;
use crate::data::axis::{AxisRangeConfig, XAxisConfig};
use crate::data::axis_kind::DataSourceKind;
use crate::data::plot::{AxisPlotHost, XyPlotAxes};
use crate::data::si_value::{format_si, SiPrefixes};
use crate::panels::{AxisDialogAction, AxisDialogPanel, Panel};

pub struct AxisDemoApp {
    pub plot: XyPlotAxes,
    pub dialog: AxisDialogPanel,
    prefixes: SiPrefixes,
    precision: usize,
}

impl AxisDemoApp {
    pub fn new(source: DataSourceKind, cfg: AxisDialogConfig) -> Self {
        let prefixes = cfg.range_fields.si_prefixes().unwrap_or_default();
        let precision = cfg.range_fields.precision;
        Self {
            plot: XyPlotAxes::new(source),
            dialog: AxisDialogPanel::new(cfg),
            prefixes,
            precision,
        }
    }

    fn describe_x(&self, x: &XAxisConfig, unit: &str) -> String {
        let scale = if x.use_log_scale { "log" } else { "linear" };
        let range = if x.mode.is_auto() {
            format!("{:?}", x.mode)
        } else {
            format!(
                "{} .. {}, div {}",
                format_si(x.range_min, unit, &self.prefixes, self.precision),
                format_si(x.range_max, unit, &self.prefixes, self.precision),
                format_si(x.range_division_count, unit, &self.prefixes, self.precision)
            )
        };
        format!("{} ({}), {}", x.kind, scale, range)
    }

    fn describe_y(&self, y: &AxisRangeConfig) -> String {
        if y.kind.is_disabled() {
            return y.kind.to_string();
        }
        let scale = if y.use_log_scale { "log" } else { "linear" };
        let range = match y.manual_range() {
            Some((min, max)) => format!(
                "{} .. {}",
                format_si(min, &y.unit, &self.prefixes, self.precision),
                format_si(max, &y.unit, &self.prefixes, self.precision)
            ),
            None => "auto".to_string(),
        };
        format!("{} ({}), {}", y.kind, scale, range)
    }
}

impl eframe::App for AxisDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("axis_demo_top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.dialog.render_menu(ui);
                ui.separator();
                ui.label(format!("Source: {}", self.plot.source()));
            });
        });

        let settings = self.plot.settings().clone();
        let x_unit = self.plot.x_axis_unit(settings.x_axis.kind);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("axis_demo_summary")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    ui.label("X axis");
                    ui.label(self.describe_x(&settings.x_axis, &x_unit));
                    ui.end_row();
                    ui.label("Y1 axis");
                    ui.label(self.describe_y(&settings.y_axis[0]));
                    ui.end_row();
                    ui.label("Y2 axis");
                    ui.label(self.describe_y(&settings.y_axis[1]));
                    ui.end_row();
                });
            ui.weak(format!("{} commits", self.plot.revision()));
        });

        if self.dialog.show(ctx, &mut self.plot) == AxisDialogAction::Accepted {
            log::info!("axes updated (revision {})", self.plot.revision());
        }
    }
}
