//! Minimal health-check service with request observability.
//!
//! The HTTP surface is one endpoint; the substance is the pipeline around
//! it. Every request gets an entry/exit record with wall-clock latency,
//! and every record fans out to a console sink and two size-rotated files
//! with independent severity floors.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod logging;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

#[cfg(test)]
pub(crate) mod testutil;
