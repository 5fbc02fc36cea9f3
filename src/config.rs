/// Default tracing filter; warnings only, so the echo channel stays readable.
pub const DEFAULT_LOG_FILTER: &str = "postprocessor=warn";

/// Tracing filter used with `--debug`.
pub const DEBUG_LOG_FILTER: &str = "postprocessor=debug";

/// Runtime configuration for the postprocessor.
///
/// Resolved once from CLI flags and the environment before the stream is
/// read. The core only ever sees `echo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Copy every input line to stderr.
    pub echo: bool,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Config {
    /// Build a config from the `--verbose` level and `--debug` flag.
    ///
    /// `RUST_LOG`, when set, takes precedence over the built-in filters.
    pub fn new(verbose: u8, debug: bool) -> Self {
        Self::with_env_filter(verbose, debug, std::env::var("RUST_LOG").ok())
    }

    fn with_env_filter(verbose: u8, debug: bool, env_filter: Option<String>) -> Self {
        let log_filter = env_filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| {
                if debug {
                    DEBUG_LOG_FILTER.to_string()
                } else {
                    DEFAULT_LOG_FILTER.to_string()
                }
            });

        Self {
            echo: verbose > 0,
            log_filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_env_filter(1, false, None)
    }
}
