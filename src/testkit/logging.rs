//! Logging-to-test-output adapter.
//!
//! [`init`] installs a tracing subscriber whose writer is the libtest capture
//! writer, so records emitted by code under test land in the output shown for
//! the test that emitted them. [`CapturedLogs`] is an in-memory sink for
//! tests that assert on emitted records. The validators themselves never log.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Install the test-output subscriber for the whole test process.
///
/// Idempotent: the first subscriber installed in the process wins and later
/// calls are no-ops. Respects `RUST_LOG`; defaults to `debug` when unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(false)
        .compact()
        .try_init();
}

/// In-memory log sink for tests that assert on emitted records.
///
/// Clones share one buffer; hand a clone to
/// `tracing_subscriber::fmt().with_writer(..)` and read back with
/// [`contents`](CapturedLogs::contents).
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
