use log::LevelFilter;

/// Log target for command orchestration
pub const LOG_TARGET: &str = "repo-lens";

/// Installs the global logger.
///
/// Logs at `Info`, or `Debug` when `debug` is set; `filters` in `RUST_LOG` syntax refine that.
/// Only the first call in a process takes effect.
pub fn init_logging(debug: bool, filters: Option<&str>) {
    let mut builder = env_logger::Builder::new();
    let _ = builder.filter_level(if debug { LevelFilter::Debug } else { LevelFilter::Info });

    if let Some(filters) = filters {
        let _ = builder.parse_filters(filters);
    }

    if builder.try_init().is_err() {
        log::debug!(target: LOG_TARGET, "Logger already initialized");
    }
}
