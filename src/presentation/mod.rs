pub mod config;
pub mod controllers;
pub mod handlers;
pub mod launcher;
pub mod router;

pub use config::{Environment, Settings};
pub use launcher::{App, create_app};
pub use router::create_router;
