mod global_handler;
mod init_tracing;
mod observability_error;
mod prompt_sanitizer;
mod request_id;
mod tracing_config;

pub use global_handler::{
    DEFAULT_GLOBAL_HANDLER, GlobalHandler, global_handler, set_global_handler,
    set_global_handler_from_str,
};
pub use init_tracing::init_tracing;
pub use observability_error::ObservabilityError;
pub use prompt_sanitizer::sanitize_prompt;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_config::TracingConfig;
