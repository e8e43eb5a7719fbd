use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::Router;

use crate::infrastructure::di::{Container, ResolutionError};
use crate::presentation::config::Settings;
use crate::presentation::controllers::{ChatRouter, HealthRouter, IngestRouter};
use crate::presentation::router::create_router;

/// The assembled service: routes plus middleware, not yet bound to a socket.
#[derive(Clone)]
pub struct App {
    router: Router,
    settings: Arc<Settings>,
}

impl App {
    pub fn port(&self) -> u16 {
        self.settings.server.port
    }

    /// Loopback address on the configured port.
    pub fn address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port()))
    }

    pub fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Resolves the route controllers from `container` and assembles the app.
pub fn create_app(container: &Container) -> Result<App, ResolutionError> {
    let settings = container.get::<Settings>()?;

    let routes = Router::new()
        .merge(container.get_or_inject::<HealthRouter>()?.routes())
        .merge(container.get_or_inject::<ChatRouter>()?.routes())
        .merge(container.get_or_inject::<IngestRouter>()?.routes());

    tracing::info!(
        environment = %settings.server.env_name,
        port = settings.server.port,
        cors = settings.server.cors.enabled,
        "Application assembled"
    );

    Ok(App {
        router: create_router(routes, &settings),
        settings,
    })
}
