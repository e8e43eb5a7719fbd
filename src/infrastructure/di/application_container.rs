use std::sync::Arc;

use crate::application::ports::{Embedder, LlmClient, TextSplitter, VectorStore};
use crate::application::services::{ChatService, IngestService};
use crate::infrastructure::llm::{EmbedderFactory, LlmClientFactory};
use crate::infrastructure::persistence::InMemoryVectorStore;
use crate::infrastructure::text_processing::RecursiveCharacterSplitter;
use crate::presentation::config::{Settings, load_active_settings};
use crate::presentation::controllers::{ChatRouter, HealthRouter, IngestRouter};

use super::{Container, ContainerBuilder, Provider, ResolutionError, Scope};

/// Production container; settings are loaded from their layered sources on
/// first resolution.
pub fn create_application_container() -> Container {
    application_container_builder(Provider::factory(load_settings)).build()
}

/// Production container around settings the caller already loaded.
pub fn create_application_container_with(settings: Settings) -> Container {
    application_container_builder(Provider::instance(Arc::new(settings))).build()
}

/// Production bindings around a caller-chosen settings provider.
pub fn application_container_builder(settings: Provider<Settings>) -> ContainerBuilder {
    Container::builder()
        .bind(settings, Scope::Singleton)
        .bind(Provider::factory(provide_llm_client), Scope::Singleton)
        .bind(Provider::factory(provide_embedder), Scope::Singleton)
        .bind(Provider::factory(provide_vector_store), Scope::Singleton)
        .bind(Provider::factory(provide_text_splitter), Scope::Singleton)
        .bind(Provider::factory(provide_chat_service), Scope::Singleton)
        .bind(Provider::factory(provide_ingest_service), Scope::Singleton)
        .bind_injectable::<HealthRouter>(Scope::Singleton)
        .bind_injectable::<ChatRouter>(Scope::Singleton)
        .bind_injectable::<IngestRouter>(Scope::Singleton)
}

fn load_settings(_: &Container) -> Result<Arc<Settings>, ResolutionError> {
    load_active_settings()
        .map(Arc::new)
        .map_err(ResolutionError::provider::<Settings>)
}

fn provide_llm_client(container: &Container) -> Result<Arc<dyn LlmClient>, ResolutionError> {
    let settings = container.get::<Settings>()?;
    LlmClientFactory::create(&settings).map_err(ResolutionError::provider::<dyn LlmClient>)
}

fn provide_embedder(container: &Container) -> Result<Arc<dyn Embedder>, ResolutionError> {
    let settings = container.get::<Settings>()?;
    EmbedderFactory::create(&settings).map_err(ResolutionError::provider::<dyn Embedder>)
}

fn provide_vector_store(container: &Container) -> Result<Arc<dyn VectorStore>, ResolutionError> {
    let settings = container.get::<Settings>()?;
    Ok(Arc::new(InMemoryVectorStore::new(
        settings.embedding.dimension,
    )))
}

fn provide_text_splitter(
    container: &Container,
) -> Result<Arc<dyn TextSplitter>, ResolutionError> {
    let settings = container.get::<Settings>()?;
    Ok(Arc::new(RecursiveCharacterSplitter::new(
        settings.rag.chunk_size,
        settings.rag.chunk_overlap,
    )))
}

fn provide_chat_service(container: &Container) -> Result<Arc<ChatService>, ResolutionError> {
    let settings = container.get::<Settings>()?;
    Ok(Arc::new(ChatService::new(
        container.get::<dyn LlmClient>()?,
        container.get::<dyn Embedder>()?,
        container.get::<dyn VectorStore>()?,
        settings.rag.similarity_top_k,
        settings.rag.similarity_threshold,
    )))
}

fn provide_ingest_service(container: &Container) -> Result<Arc<IngestService>, ResolutionError> {
    Ok(Arc::new(IngestService::new(
        container.get::<dyn Embedder>()?,
        container.get::<dyn VectorStore>()?,
        container.get::<dyn TextSplitter>()?,
    )))
}
