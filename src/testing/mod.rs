//! Test facade over the application container.

mod call_log;
mod log_capture;
mod mock_injector;
mod stand_ins;

pub use call_log::{Call, CallLog};
pub use log_capture::{LogCapture, LogCaptureWriter};
pub use mock_injector::{BindSettingsError, MockInjector};
pub use stand_ins::{
    EmbedderStandIn, LlmClientStandIn, StandIn, TextSplitterStandIn, VectorStoreStandIn,
};
