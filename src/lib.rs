//! Axis configuration for XY trace plots of network and spectrum analyzer data.
//!
//! The crate is organised as:
//! - `data`: axis kinds, the compatibility rules between X and Y quantities,
//!   the axis settings model and the dialog's edit buffer (toolkit independent)
//! - `panels`: egui rendering of the axis dialog
//! - `config`: dialog configuration
//! - `app`: a native demo window hosting the dialog

pub mod app;
pub mod config;
pub mod data;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_axis_demo, AxisDemoApp};
pub use config::{AxisDialogConfig, RangeFieldConfig};
pub use data::axis::{AxisRangeConfig, PlotAxisSettings, XAxisConfig, XAxisMode};
pub use data::axis_kind::{DataSourceKind, XAxisKind, YAxisKind};
pub use data::compat::{is_x_axis_selectable, supported_y_axis_kinds, AxisCompatibilityResolver};
pub use data::form::{AxisConfigForm, DerivedEnablement, XAutoMode, YAxisId};
pub use data::plot::{AxisPlotHost, XyPlotAxes};
pub use panels::{AxisDialogAction, AxisDialogPanel};
