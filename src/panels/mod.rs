pub mod axis_dialog_ui;
pub mod panel_trait;

pub use axis_dialog_ui::{AxisDialogAction, AxisDialogPanel};
pub use panel_trait::{Panel, PanelState};
