use super::GlobalHandler;

#[derive(Debug, thiserror::Error)]
pub enum ObservabilityError {
    #[error("unknown observability mode: {0}")]
    UnknownMode(String),
    #[error("global handler already set to `{current}`, cannot switch to `{requested}`")]
    AlreadySet {
        current: GlobalHandler,
        requested: GlobalHandler,
    },
    #[error("tracing subscriber: {0}")]
    Subscriber(String),
}
