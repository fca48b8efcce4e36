use std::sync::Once;

static INIT: Once = Once::new();

/// Sets up the global logger once; later calls do nothing.
///
/// Diagnostics go to stdout. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.target(env_logger::Target::Stdout);
        builder.init();

        log::debug!("logging initialized");
    });
}
