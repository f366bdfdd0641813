//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Install logging → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     SIGTERM/SIGINT → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: logging comes up before the listener, so the service
//!   never takes traffic it cannot observe
//! - A logging failure aborts startup; nothing else is allowed to

pub mod shutdown;

pub use shutdown::Shutdown;
