//! Common test utilities and fixtures for zipmatch integration tests.

use std::io;
use std::sync::{Arc, Mutex, Once};

use tracing_subscriber::fmt::MakeWriter;

static INIT: Once = Once::new();

/// Installs a global `tracing` subscriber once per test binary.
///
/// Honours `RUST_LOG`; defaults to `zipmatch=trace`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "zipmatch=trace".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Runs `f` with a trace-level subscriber writing into this sink.
    pub fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
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
