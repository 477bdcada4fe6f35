use egui::Ui;

#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    pub visible: bool,
}

pub trait Panel {
    fn name(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn is_visible(&self) -> bool {
        self.state().visible
    }

    // Optional hooks with default empty impls
    fn render_menu(&mut self, _ui: &mut Ui) {}
}
