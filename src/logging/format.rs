//! Shared log line format.
//!
//! Every sink renders records through the same [`LineFormat`], so console
//! and file output stay byte-identical:
//!
//! ```text
//! 2026-08-23 14:07:31.248 - vitals::http::middleware - INFO - Request started: GET /health
//! ```

use std::fmt;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// ISO-like local timestamp with millisecond precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// `timestamp - target - LEVEL - message` event formatter.
///
/// The target (by default the emitting module path) stands in for a logger
/// name; the record's fields follow the prefix via the default field
/// formatter.
#[derive(Debug, Clone, Default)]
pub struct LineFormat;

impl<C, N> FormatEvent<C, N> for LineFormat
where
    C: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, C, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            metadata.target(),
            metadata.level(),
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
