mod chat_router;
mod health_router;
mod ingest_router;

pub use chat_router::ChatRouter;
pub use health_router::HealthRouter;
pub use ingest_router::IngestRouter;
