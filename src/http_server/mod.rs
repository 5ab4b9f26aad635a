//! # HTTP Server Module
//!
//! Axum server exposing the ingest endpoint.
//!
//! # Endpoints
//!
//! - `PUT /` - Ingest a batch of events
//! - `GET /health` - Health check

pub mod config;
pub mod health_routes;
pub mod ingest_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
