//! Test support: an in-memory sink for asserting on emitted log lines.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Subscriber;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

use crate::logging::format::LineFormat;

/// Cloneable in-memory writer capturing formatted log output.
#[derive(Clone, Default)]
pub(crate) struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("log output is UTF-8")
    }

    /// Captured output split into lines, trailing newlines dropped.
    pub(crate) fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A subscriber rendering through the production [`LineFormat`] into a
/// [`Capture`] buffer.
pub(crate) fn recording_subscriber() -> (impl Subscriber + Send + Sync, Capture) {
    let capture = Capture::default();
    let layer = fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer({
            let writer = capture.clone();
            move || writer.clone()
        });
    (tracing_subscriber::registry().with(layer), capture)
}
