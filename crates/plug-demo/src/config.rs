//! # Demo Configuration
//!
//! Process-level settings read from the environment.

use std::path::PathBuf;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Demo configuration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Explicit scenario file (`PLUG_SCENARIO`)
    pub scenario_path: Option<PathBuf>,
    /// `LOG_FORMAT=json` switches to JSON logs
    pub log_format: LogFormat,
}

impl DemoConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            scenario_path: std::env::var("PLUG_SCENARIO").ok().map(PathBuf::from),
            log_format,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
