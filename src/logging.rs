use env_logger::Env;

/// Initializes env_logger. `RUST_LOG` overrides the default `info` filter;
/// round-by-round detail sits at debug.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
