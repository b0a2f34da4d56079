//! Log capture for handler tests.

use std::io;
use std::sync::{Arc, Mutex};

/// In-memory log sink shared with the subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under an INFO-level subscriber (the `--verbose` filter) and
/// return everything it logged.
pub(crate) fn capture_info_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = logs.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
