//! Integration tests against a mock catalog server

mod catalog_client;
mod fetch_pipeline;
