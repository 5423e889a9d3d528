// src/config.rs
use std::path::PathBuf;

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the external evaluator invoked for each run request.
    pub evaluator: PathBuf,

    /// Whether a client disconnect kills the in-flight evaluator subprocess.
    pub kill_on_disconnect: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            evaluator: PathBuf::from("./eval.sh"),
            kill_on_disconnect: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults: `EVALMOCK_EVALUATOR` for the evaluator path and
    /// `EVALMOCK_KILL_ON_DISCONNECT` ("0"/"false" to disable) for
    /// cancellation behavior.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(evaluator) = std::env::var("EVALMOCK_EVALUATOR") {
            config.evaluator = PathBuf::from(evaluator);
        }

        if let Ok(flag) = std::env::var("EVALMOCK_KILL_ON_DISCONNECT") {
            config.kill_on_disconnect = parse_flag(&flag);
        }

        config
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no")
}
