//! Tests for the `tracing` events emitted by selection operations.

use ordselect::comparator::Natural;
use ordselect::select::{kmin, min, range};
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted events in memory.
#[derive(Clone, Default)]
struct CapturedLog {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLog {
    fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'writer> MakeWriter<'writer> for CapturedLog {
    type Writer = Self;

    fn make_writer(&'writer self) -> Self::Writer {
        self.clone()
    }
}

fn capture<R>(body: impl FnOnce() -> R) -> (R, String) {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(log.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, body);
    (result, log.contents())
}

#[rstest]
fn test_failure_is_reported_at_debug() {
    let values = vec![7];
    let (result, output) = capture(|| kmin(Some(&values), 2, Some(&Natural)).copied());

    assert!(result.is_err());
    assert!(output.contains("DEBUG"), "{output}");
    assert!(output.contains("selection failed"), "{output}");
    assert!(output.contains("kmin"), "{output}");
    assert!(output.contains("NoSuchElement"), "{output}");
}

#[rstest]
fn test_success_is_reported_at_trace() {
    let values = vec![5, 3, 3, 8, 1];
    let (result, output) = capture(|| min(Some(&values), Some(&Natural)).copied());

    assert_eq!(result, Ok(1));
    assert!(output.contains("TRACE"), "{output}");
    assert!(output.contains("selection succeeded"), "{output}");
    assert!(output.contains("min"), "{output}");
}

#[rstest]
fn test_success_is_never_above_trace() {
    let values = vec![5, 3, 3, 8, 1];
    let (result, output) = capture(|| range(Some(&values), &3, &8, Some(&Natural)));

    assert_eq!(result, Ok(vec![&5, &3, &3, &8]));
    assert!(output.contains("TRACE"), "{output}");
    assert!(!output.contains("DEBUG"), "{output}");
}
