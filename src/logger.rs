use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("failed to install the global logging sink: {0}")]
    Install(String),
}

/// Output profile for the process-wide subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogProfile {
    /// Human-readable, ANSI-colorized, debug-verbosity output.
    Local,
    /// JSON output with an info-severity threshold.
    Production,
}

impl LogProfile {
    /// Exactly `"local"` selects the development profile; any other value,
    /// including an unset variable, selects production.
    pub fn from_env_name(name: Option<&str>) -> Self {
        match name {
            Some("local") => Self::Local,
            _ => Self::Production,
        }
    }

    fn default_filter(self) -> &'static str {
        match self {
            Self::Local => "debug",
            Self::Production => "info",
        }
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Handle to the process-wide structured logging sink.
///
/// Installed at most once per process; every component that logs receives
/// this handle from the composition root rather than reaching for an
/// ambient global.
#[derive(Debug)]
pub struct Logger {
    profile: LogProfile,
}

impl Logger {
    /// Installs the global `tracing` subscriber on first call and returns
    /// the singleton handle. Subsequent calls return the same instance
    /// without touching the subscriber again.
    ///
    /// The profile is keyed off the `ENV` variable at first-call time.
    pub fn init() -> Result<&'static Logger, LoggerInitError> {
        let _guard = INIT_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(logger) = LOGGER.get() {
            return Ok(logger);
        }

        let env = std::env::var("ENV").ok();
        let profile = LogProfile::from_env_name(env.as_deref());
        install_subscriber(profile)?;

        Ok(LOGGER.get_or_init(|| Logger { profile }))
    }

    pub fn profile(&self) -> LogProfile {
        self.profile
    }

    /// Best-effort flush of the sink, called by the composition root at
    /// shutdown rather than at construction.
    pub fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

fn install_subscriber(profile: LogProfile) -> Result<(), LoggerInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));

    let result = match profile {
        LogProfile::Local => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(true)
            .pretty()
            .try_init(),
        LogProfile::Production => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
    };

    result.map_err(|e| LoggerInitError::Install(e.to_string()))
}
