//! Typed dependency container and the production wiring.
//!
//! Capabilities are keyed by type (`Settings`, `dyn LlmClient`, concrete
//! services) and produced by a [`Provider`] under a [`Scope`]. All binding
//! happens before resolution; [`Container::bind`] rejects a capability that
//! has already been resolved.

mod application_container;
mod container;
mod di_error;
mod scope;

pub use application_container::{
    application_container_builder, create_application_container,
    create_application_container_with,
};
pub use container::{Container, ContainerBuilder, Injectable, Provider};
pub use di_error::{BindError, ResolutionError};
pub use scope::Scope;
