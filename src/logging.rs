//! Logger setup for the binary

use env_logger::Env;

/// Environment variable holding the log filter (e.g. `debug`, `daylog=trace`)
pub const LOG_ENV: &str = "DAYLOG_LOG";

/// Route `log` output to stderr, defaulting to warnings only.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .try_init();
}
