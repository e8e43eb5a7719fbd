use std::sync::Arc;

use docu_chat::application::ports::{Embedder, TextSplitter, VectorStore};
use docu_chat::application::services::{IngestError, IngestService};
use docu_chat::domain::DocumentId;
use docu_chat::infrastructure::llm::MockEmbedder;
use docu_chat::infrastructure::persistence::InMemoryVectorStore;
use docu_chat::infrastructure::text_processing::RecursiveCharacterSplitter;
use docu_chat::testing::{EmbedderStandIn, TextSplitterStandIn, VectorStoreStandIn};

const TEST_DIMENSION: usize = 32;

fn in_memory_service() -> IngestService {
    IngestService::new(
        Arc::new(MockEmbedder::new(TEST_DIMENSION)),
        Arc::new(InMemoryVectorStore::new(TEST_DIMENSION)),
        Arc::new(RecursiveCharacterSplitter::new(20, 5)),
    )
}

#[tokio::test]
async fn given_blank_text_when_ingesting_then_returns_empty_document() {
    let service = in_memory_service();

    let result = service.ingest_text("blank.txt".to_string(), " \n ").await;

    assert!(matches!(result, Err(IngestError::EmptyDocument(name)) if name == "blank.txt"));
}

#[tokio::test]
async fn given_long_text_when_ingesting_then_every_chunk_is_stored() {
    let service = in_memory_service();
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda";

    let ingested = service
        .ingest_text("greek.txt".to_string(), text)
        .await
        .unwrap();

    assert!(ingested.chunk_count > 1);
    assert_eq!(ingested.document.size_bytes, text.len() as u64);
    let documents = service.list_documents().await.unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, ingested.document.id);
}

#[tokio::test]
async fn given_stand_ins_when_ingesting_then_pipeline_calls_each_port() {
    let splitter = Arc::new(TextSplitterStandIn::default());
    let embedder = Arc::new(EmbedderStandIn::with_dimension(2));
    let store = Arc::new(VectorStoreStandIn::default());
    let service = IngestService::new(
        Arc::clone(&embedder) as Arc<dyn Embedder>,
        Arc::clone(&store) as Arc<dyn VectorStore>,
        Arc::clone(&splitter) as Arc<dyn TextSplitter>,
    );

    service
        .ingest_text("doc.txt".to_string(), "hello")
        .await
        .unwrap();

    assert_eq!(splitter.calls.count("split"), 1);
    assert_eq!(
        embedder.calls.calls_to("embed_batch")[0].args,
        vec!["hello".to_string()]
    );
    assert_eq!(
        store.calls.calls_to("upsert")[0].args,
        vec!["doc.txt".to_string(), "1".to_string()]
    );
}

#[tokio::test]
async fn given_unknown_document_when_deleting_then_returns_not_found() {
    let service = in_memory_service();
    let id = DocumentId::new();

    let result = service.delete_document(id).await;

    assert!(matches!(result, Err(IngestError::NotFound(missing)) if missing == id));
}

#[tokio::test]
async fn given_ingested_document_when_deleting_then_it_is_no_longer_listed() {
    let service = in_memory_service();
    let ingested = service
        .ingest_text("gone.txt".to_string(), "short lived text")
        .await
        .unwrap();

    service.delete_document(ingested.document.id).await.unwrap();

    assert!(service.list_documents().await.unwrap().is_empty());
}
