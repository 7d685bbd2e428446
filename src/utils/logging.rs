use log::LevelFilter;

/// Initialize the global logger.
///
/// `--debug` forces debug output for this crate; otherwise `RUST_LOG`
/// decides and warnings are shown by default.
pub fn init_logging(debug_mode: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug_mode {
        builder.filter_module("fontdesc", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
