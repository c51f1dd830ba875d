use env_logger::Env;
use log::SetLoggerError;

const DEFAULT_FILTER: &str = "info";

/// Installs `env_logger`, filtered by `RUST_LOG` (default `info`).
pub fn init() -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).try_init()
}
