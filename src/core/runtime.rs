use crate::utils::error::Result;
use crate::utils::logger;
use crate::utils::validation::{validate_log_level, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const WORKER_THREADS: usize = 4;
/// Suites only want to hear about failures.
pub const DEFAULT_LOG_LEVEL: &str = "error";

static SETTINGS: OnceLock<RuntimeSettings> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub worker_threads: usize,
    pub log_level: String,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            worker_threads: WORKER_THREADS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Validate for RuntimeSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("runtime.worker_threads", self.worker_threads, 1)?;
        validate_log_level("runtime.log_level", &self.log_level)
    }
}

impl RuntimeSettings {
    pub fn build_runtime(&self) -> Result<tokio::runtime::Runtime> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.worker_threads.max(1))
            .thread_name("thriftrpc-worker")
            .enable_all()
            .build()?;
        Ok(runtime)
    }
}

pub fn init() -> &'static RuntimeSettings {
    init_with(RuntimeSettings::default())
}

/// First caller wins; later settings are ignored.
pub fn init_with(settings: RuntimeSettings) -> &'static RuntimeSettings {
    SETTINGS.get_or_init(|| {
        if !logger::init_logger(&settings.log_level) {
            tracing::debug!("global subscriber already installed, keeping it");
        }
        settings
    })
}

pub fn settings() -> Option<&'static RuntimeSettings> {
    SETTINGS.get()
}
