//! HTTP surface: the landing page and the scrape endpoint.

pub mod routes;
pub mod server;

pub use server::{AppState, ExporterServer, ServerConfig};
