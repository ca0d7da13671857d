use env_logger::Target;
use log::LevelFilter;

/// Send diagnostics to stderr so stdout only carries the banner line.
///
/// `level` replaces the default level from `RUST_LOG`; module-specific
/// directives in `RUST_LOG` still apply.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .target(Target::Stderr)
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
