use std::sync::Arc;

use serde_json::Value;

use crate::infrastructure::di::{
    BindError, Container, Provider, ResolutionError, Scope, application_container_builder,
};
use crate::presentation::config::{
    DEFAULT_PROFILE, Settings, SettingsError, TEST_PROFILE, load_unsafe_settings, merge_settings,
};

use super::StandIn;

#[derive(Debug, thiserror::Error)]
pub enum BindSettingsError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Bind(#[from] BindError),
}

/// Production container with test-friendly overrides.
///
/// Settings default to the `default` + `test` profiles instead of the
/// process environment. Everything must be bound before the first `get`
/// that depends on it.
#[derive(Debug)]
pub struct MockInjector {
    test_container: Container,
}

impl MockInjector {
    pub fn new() -> Self {
        let test_container =
            application_container_builder(Provider::factory(load_test_settings)).build();
        Self { test_container }
    }

    /// Binds `mock` as a singleton and hands it back unchanged.
    pub fn bind_mock<T>(&mut self, mock: Arc<T>) -> Result<Arc<T>, BindError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.test_container.bind_instance(Arc::clone(&mock))?;
        Ok(mock)
    }

    pub fn bind_mock_with_scope<T, F>(&mut self, factory: F, scope: Scope) -> Result<(), BindError>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> Result<Arc<T>, ResolutionError> + Send + Sync + 'static,
    {
        self.test_container.bind_factory(factory, scope)
    }

    /// Binds the inert double for `T` and returns it for assertions.
    pub fn bind_stand_in<T: ?Sized + StandIn>(&mut self) -> Result<Arc<T::Double>, BindError> {
        let double = T::stand_in();
        self.bind_mock::<T>(T::upcast(Arc::clone(&double)))?;
        Ok(double)
    }

    /// Rebinds settings to the test baseline with `overrides` merged on top.
    pub fn bind_settings(&mut self, overrides: Value) -> Result<Arc<Settings>, BindSettingsError> {
        let settings = self.bind_mock(Arc::new(test_settings(overrides)?))?;
        tracing::debug!(port = settings.server.port, "Test settings bound");
        Ok(settings)
    }

    pub fn get<T>(&self) -> Result<Arc<T>, ResolutionError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.test_container.get::<T>()
    }

    pub fn container(&self) -> &Container {
        &self.test_container
    }
}

impl Default for MockInjector {
    fn default() -> Self {
        Self::new()
    }
}

fn load_test_settings(_: &Container) -> Result<Arc<Settings>, ResolutionError> {
    test_settings(Value::Null)
        .map(Arc::new)
        .map_err(ResolutionError::provider::<Settings>)
}

fn test_settings(overrides: Value) -> Result<Settings, SettingsError> {
    let baseline = load_unsafe_settings(&[DEFAULT_PROFILE.to_string(), TEST_PROFILE.to_string()])?;
    let layers = match overrides {
        Value::Null => vec![baseline],
        overrides => vec![baseline, overrides],
    };
    Settings::from_merged(merge_settings(&layers))
}
