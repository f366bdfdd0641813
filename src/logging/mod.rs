//! Multi-sink logging with size-rotated files.
//!
//! # Data Flow
//! ```text
//! tracing macros (middleware, handlers, startup)
//!     → baseline filter (RUST_LOG override, else configured level)
//!     → console layer   (stdout, no extra filter)
//!     → app.log layer   (INFO and above, size-rotated)
//!     → error.log layer (ERROR and above, size-rotated)
//! ```
//!
//! # Design Decisions
//! - All sinks share the `timestamp - target - LEVEL - message` template,
//!   so a record looks the same everywhere it lands
//! - Each file sink is a mutex-guarded [`rotation::RollingFile`]; one lock
//!   acquisition covers a whole line
//! - Initialization failures are fatal; per-record write failures are not

pub mod format;
mod init;
pub mod rotation;

pub use init::{init, LogGuard, LoggingError, APP_LOG, ERROR_LOG};
