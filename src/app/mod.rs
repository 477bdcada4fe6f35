//! Native demo application.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`axis_demo_app`] | [`AxisDemoApp`] (eframe) holding a plot's axes and the dialog |
//! | [`run`]           | [`run_axis_demo()`] entry point |

mod axis_demo_app;
mod run;

pub use axis_demo_app::AxisDemoApp;
pub use run::run_axis_demo;
