//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! client request
//!     → middleware.rs (entry record, start the clock)
//!     → CORS layer (tower-http, fully permissive)
//!     → router → handlers.rs (GET /health)
//!     → middleware.rs (exit record: status + elapsed seconds)
//!     → Send to client (unmodified by the pipeline)
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{build_router, HttpServer};
