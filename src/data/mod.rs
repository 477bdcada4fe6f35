pub mod axis;
pub mod axis_kind;
pub mod combo;
pub mod compat;
pub mod form;
pub mod plot;
pub mod si_value;
