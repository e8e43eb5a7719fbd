use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::infrastructure::di::{Container, Injectable, ResolutionError};
use crate::presentation::config::Settings;
use crate::presentation::handlers::health_handler;

pub struct HealthRouter {
    settings: Arc<Settings>,
}

impl HealthRouter {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    pub fn routes(&self) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .with_state(Arc::clone(&self.settings))
    }
}

impl Injectable for HealthRouter {
    fn inject(container: &Container) -> Result<Self, ResolutionError> {
        Ok(Self::new(container.get::<Settings>()?))
    }
}
