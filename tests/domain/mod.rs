mod embedding_test;
mod message_role_test;
