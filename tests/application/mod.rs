mod ingest_service_test;
