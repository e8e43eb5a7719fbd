use std::error::Error as StdError;

#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("no binding registered for `{type_name}`")]
    Unbound { type_name: &'static str },
    #[error("dependency cycle detected: {chain}")]
    Cycle { chain: String },
    #[error("provider for `{type_name}` failed: {source}")]
    Provider {
        type_name: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ResolutionError {
    pub fn provider<T: ?Sized>(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Provider {
            type_name: std::any::type_name::<T>(),
            source: source.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("`{type_name}` was already resolved and cannot be rebound")]
    AlreadyResolved { type_name: &'static str },
}
