use eframe::egui;
use egui::{Color32, Context, Ui};
use egui_phosphor::regular::{CHECK, SLIDERS_HORIZONTAL, X};

use super::panel_trait::{Panel, PanelState};
use crate::config::AxisDialogConfig;
use crate::data::axis_kind::{XAxisKind, YAxisKind};
use crate::data::combo::ComboItems;
use crate::data::form::{AxisConfigForm, DerivedEnablement, XAutoMode, YAxisId};
use crate::data::plot::AxisPlotHost;
use crate::data::si_value::{format_si, parse_si, SiPrefixes, SiValueError};

/// Outcome of one frame of the axis dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDialogAction {
    None,
    Accepted,
    Cancelled,
}

/// Text entry for one SI-valued range field.
#[derive(Debug, Clone, Default)]
struct SiField {
    text: String,
    error: Option<SiValueError>,
}

struct RangeFormat<'a> {
    prefixes: &'a SiPrefixes,
    precision: usize,
    width: f32,
}

impl SiField {
    /// Returns the newly entered value once editing finishes with valid input.
    fn show(
        &mut self,
        ui: &mut Ui,
        enabled: bool,
        value: f64,
        unit: &str,
        fmt: &RangeFormat<'_>,
    ) -> Option<f64> {
        let resp = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut self.text).desired_width(fmt.width),
        );
        let mut entered = None;
        if resp.lost_focus() {
            match parse_si(&self.text, unit, fmt.prefixes) {
                Ok(v) => {
                    self.error = None;
                    entered = Some(v);
                }
                Err(e) => {
                    log::debug!("rejected range input {:?}: {}", self.text, e);
                    self.error = Some(e);
                }
            }
        }
        // Show the stored value unless the user is typing or fixing bad input.
        if !resp.has_focus() && (self.error.is_none() || !enabled) {
            self.error = None;
            self.text = format_si(entered.unwrap_or(value), unit, fmt.prefixes, fmt.precision);
        }
        if let Some(e) = &self.error {
            ui.colored_label(Color32::from_rgb(0xD0, 0x40, 0x40), "⚠")
                .on_hover_text(e.to_string());
        }
        entered
    }
}

#[derive(Debug, Clone, Default)]
struct RangeFields {
    min: SiField,
    max: SiField,
    divisions: SiField,
}

/// Dialog for configuring the X axis and both Y axes of an XY plot.
///
/// Edits go to an [`AxisConfigForm`] snapshot taken when the dialog opens and
/// reach the plot only when the user presses Ok.
pub struct AxisDialogPanel {
    pub state: PanelState,
    config: AxisDialogConfig,
    prefixes: SiPrefixes,
    form: Option<AxisConfigForm>,
    x_fields: RangeFields,
    y_fields: [RangeFields; 2],
}

impl Default for AxisDialogPanel {
    fn default() -> Self {
        Self::new(AxisDialogConfig::default())
    }
}

impl Panel for AxisDialogPanel {
    fn name(&self) -> &'static str {
        "Axes"
    }
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_menu(&mut self, ui: &mut Ui) {
        if ui
            .button(format!("{} Axes...", SLIDERS_HORIZONTAL))
            .on_hover_text("Configure axis types and ranges")
            .clicked()
        {
            self.state.visible = true;
        }
    }
}

impl AxisDialogPanel {
    pub fn new(config: AxisDialogConfig) -> Self {
        let prefixes = match config.range_fields.si_prefixes() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("invalid range prefixes {:?}: {}", config.range_fields.prefixes, e);
                SiPrefixes::default()
            }
        };
        Self {
            state: PanelState::default(),
            config,
            prefixes,
            form: None,
            x_fields: RangeFields::default(),
            y_fields: Default::default(),
        }
    }

    /// Open the dialog with a fresh snapshot of `host`'s axes.
    pub fn open(&mut self, host: &impl AxisPlotHost) {
        self.form = Some(AxisConfigForm::open(host));
        self.x_fields = RangeFields::default();
        self.y_fields = Default::default();
        self.state.visible = true;
    }

    pub fn form(&self) -> Option<&AxisConfigForm> {
        self.form.as_ref()
    }

    fn close(&mut self) {
        self.form = None;
        self.state.visible = false;
    }

    /// Draw the dialog if visible and apply Ok/Cancel to `host`.
    pub fn show(&mut self, ctx: &Context, host: &mut impl AxisPlotHost) -> AxisDialogAction {
        if !self.state.visible {
            return AxisDialogAction::None;
        }
        if self.form.is_none() {
            self.open(&*host);
        }

        let mut action = AxisDialogAction::None;
        let mut window_open = true;
        let title = self.config.title.clone();
        egui::Window::new(title)
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                action = self.render_contents(ui);
            });
        if !window_open {
            action = AxisDialogAction::Cancelled;
        }

        match action {
            AxisDialogAction::Accepted => {
                if let Some(form) = self.form.take() {
                    form.accept(host);
                }
                self.close();
            }
            AxisDialogAction::Cancelled => {
                if let Some(form) = self.form.take() {
                    form.cancel();
                }
                self.close();
            }
            AxisDialogAction::None => {}
        }
        action
    }

    fn render_contents(&mut self, ui: &mut Ui) -> AxisDialogAction {
        let Some(form) = self.form.as_mut() else {
            return AxisDialogAction::Cancelled;
        };
        let derived = form.derive_form_state();
        let fmt = RangeFormat {
            prefixes: &self.prefixes,
            precision: self.config.range_fields.precision,
            width: self.config.range_fields.field_width,
        };
        let popup_height = self.config.max_visible_items as f32 * ui.spacing().interact_size.y;

        ui.columns(3, |cols| {
            for id in YAxisId::ALL {
                render_y_axis(
                    &mut cols[id.index()],
                    form,
                    &derived,
                    id,
                    &mut self.y_fields[id.index()],
                    &fmt,
                    popup_height,
                );
            }
            render_x_axis(
                &mut cols[2],
                form,
                &derived,
                &mut self.x_fields,
                &fmt,
                popup_height,
            );
        });

        ui.separator();
        let mut action = AxisDialogAction::None;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{} Cancel", X)).clicked() {
                action = AxisDialogAction::Cancelled;
            }
            if ui.button(format!("{} Ok", CHECK)).clicked() {
                action = AxisDialogAction::Accepted;
            }
        });
        action
    }
}

/// Combo box over `items`; disabled entries are shown but cannot be picked.
fn kind_combo<T: Copy + PartialEq + std::fmt::Display>(
    ui: &mut Ui,
    id_salt: &str,
    selected: T,
    items: &ComboItems<T>,
    popup_height: f32,
) -> Option<T> {
    let mut chosen = None;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(selected.to_string())
        .height(popup_height)
        .show_ui(ui, |ui| {
            for (item, enabled) in items.iter() {
                let clicked = ui
                    .add_enabled_ui(enabled, |ui| {
                        ui.selectable_label(item == selected, item.to_string())
                    })
                    .inner
                    .clicked();
                if clicked {
                    chosen = items.pick(selected, item).or(chosen);
                }
            }
        });
    chosen
}

fn scale_radio(ui: &mut Ui, enabled: bool, log: bool) -> Option<bool> {
    let mut value = log;
    ui.add_enabled_ui(enabled, |ui| {
        ui.horizontal(|ui| {
            ui.radio_value(&mut value, false, "Linear");
            ui.radio_value(&mut value, true, "Log");
        });
    });
    (value != log).then_some(value)
}

fn render_y_axis(
    ui: &mut Ui,
    form: &mut AxisConfigForm,
    derived: &DerivedEnablement,
    id: YAxisId,
    fields: &mut RangeFields,
    fmt: &RangeFormat<'_>,
    popup_height: f32,
) {
    let state = derived.y_axis(id);
    let y = form.y_axis(id).clone();
    ui.strong(id.label());

    let salt = format!("y_axis_kind_{}", id.index());
    if let Some(kind) = kind_combo::<YAxisKind>(ui, &salt, y.kind, &state.kind_items, popup_height)
    {
        form.select_y_kind(id, kind);
    }
    if let Some(log) = scale_radio(ui, state.scale_enabled, y.use_log_scale) {
        form.set_y_log(id, log);
    }
    let mut auto_range = y.auto_range;
    if ui
        .add_enabled(state.auto_enabled, egui::Checkbox::new(&mut auto_range, "Auto"))
        .changed()
    {
        form.set_y_auto(id, auto_range);
    }

    let (mut min, mut max, mut div) = (y.range_min, y.range_max, y.range_division_count);
    let mut changed = false;
    egui::Grid::new(format!("y_axis_range_{}", id.index()))
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Min");
            if let Some(v) = fields.min.show(ui, state.range_enabled, min, &state.unit, fmt) {
                min = v;
                changed = true;
            }
            ui.end_row();
            ui.label("Max");
            if let Some(v) = fields.max.show(ui, state.range_enabled, max, &state.unit, fmt) {
                max = v;
                changed = true;
            }
            ui.end_row();
            ui.label("Divisions");
            if let Some(v) = fields
                .divisions
                .show(ui, state.range_enabled, div, &state.unit, fmt)
            {
                div = v;
                changed = true;
            }
            ui.end_row();
        });
    if changed {
        form.set_y_range(id, min, max, div);
    }
}

fn render_x_axis(
    ui: &mut Ui,
    form: &mut AxisConfigForm,
    derived: &DerivedEnablement,
    fields: &mut RangeFields,
    fmt: &RangeFormat<'_>,
    popup_height: f32,
) {
    let x = form.x_axis().clone();
    ui.strong("X axis");

    if let Some(kind) =
        kind_combo::<XAxisKind>(ui, "x_axis_kind", x.kind, &derived.x_kind_items, popup_height)
    {
        form.select_x_kind(kind);
    }
    if let Some(log) = scale_radio(ui, derived.x_log_enabled, x.use_log_scale) {
        form.set_x_log(log);
    }
    ui.horizontal(|ui| {
        let mut auto_range = x.auto_range;
        if ui.checkbox(&mut auto_range, "Auto").changed() {
            form.set_x_auto(auto_range);
        }
        ui.add_enabled_ui(derived.x_auto_mode_enabled, |ui| {
            if let Some(mode) = kind_combo::<XAutoMode>(
                ui,
                "x_axis_auto_mode",
                x.auto_mode,
                &derived.x_auto_mode_items,
                popup_height,
            ) {
                form.set_x_auto_mode(mode);
            }
        });
    });

    let (mut min, mut max, mut div) = (x.range_min, x.range_max, x.range_division_count);
    let mut changed = false;
    egui::Grid::new("x_axis_range").num_columns(2).show(ui, |ui| {
        ui.label("Min");
        if let Some(v) = fields.min.show(ui, derived.x_range_enabled, min, &derived.x_unit, fmt) {
            min = v;
            changed = true;
        }
        ui.end_row();
        ui.label("Max");
        if let Some(v) = fields.max.show(ui, derived.x_range_enabled, max, &derived.x_unit, fmt) {
            max = v;
            changed = true;
        }
        ui.end_row();
        ui.label("Divisions");
        if let Some(v) =
            fields
                .divisions
                .show(ui, derived.x_divisions_enabled, div, &derived.x_unit, fmt)
        {
            div = v;
            changed = true;
        }
        ui.end_row();
    });
    if changed {
        form.set_x_range(min, max, div);
    }
}
