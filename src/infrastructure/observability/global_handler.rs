use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::ObservabilityError;

pub const DEFAULT_GLOBAL_HANDLER: &str = "simple";

static GLOBAL_HANDLER: OnceLock<GlobalHandler> = OnceLock::new();

/// Process-wide diagnostic mode for LLM calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalHandler {
    /// Logs one event per completion.
    Simple,
    /// Also logs redacted context and answer text.
    Verbose,
}

impl GlobalHandler {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalHandler::Simple => "simple",
            GlobalHandler::Verbose => "verbose",
        }
    }
}

impl FromStr for GlobalHandler {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(GlobalHandler::Simple),
            "verbose" => Ok(GlobalHandler::Verbose),
            other => Err(ObservabilityError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for GlobalHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Installs the global handler once; repeating the same mode is a no-op.
pub fn set_global_handler(handler: GlobalHandler) -> Result<(), ObservabilityError> {
    let installed = *GLOBAL_HANDLER.get_or_init(|| handler);
    if installed != handler {
        return Err(ObservabilityError::AlreadySet {
            current: installed,
            requested: handler,
        });
    }
    tracing::debug!(handler = %handler, "Global observability handler set");
    Ok(())
}

pub fn set_global_handler_from_str(mode: &str) -> Result<GlobalHandler, ObservabilityError> {
    let handler = mode.parse()?;
    set_global_handler(handler)?;
    Ok(handler)
}

pub fn global_handler() -> Option<GlobalHandler> {
    GLOBAL_HANDLER.get().copied()
}
