use xyplot_axes::config::AxisDialogConfig;
use xyplot_axes::data::axis_kind::DataSourceKind;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let source = if std::env::args().skip(1).any(|a| a == "--sa") {
        DataSourceKind::SpectrumAnalyzer
    } else {
        DataSourceKind::NetworkAnalyzer
    };
    log::info!("starting axis dialog demo for {} data", source);

    xyplot_axes::run_axis_demo(source, AxisDialogConfig::default())
}
