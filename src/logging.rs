use env_logger::Builder;
use log::LevelFilter;

/// Default level: Debug while developing, Info everywhere else.
pub fn default_level(development: bool) -> LevelFilter {
    if development {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialise the global logger. `RUST_LOG` directives, when set, are applied
/// on top of the default level. Calling this twice is harmless.
pub fn init(development: bool) {
    let mut builder = Builder::new();
    builder
        .filter_level(default_level(development))
        .filter_module("sqlx", LevelFilter::Warn); // Suppress sqlx Debug logs

    if let Ok(directives) = std::env::var("RUST_LOG") {
        builder.parse_filters(&directives);
    }

    let _ = builder.try_init();
}
