//! Tests for the `tracing` events emitted during evaluation.

use lazy_stream::control::Lazy;
use lazy_stream::stream::InfiniteList;
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        self.0
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buffer);
        }
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(action: F) -> String {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, action);
    output.contents()
}

#[rstest]
fn producer_run_is_traced() {
    let logs = capture(|| {
        let lazy = Lazy::new(|| 1);
        let _ = lazy.force();
    });
    assert!(logs.contains("running lazy producer"));
}

#[rstest]
fn skip_forward_reports_skipped_count() {
    let logs = capture(|| {
        let list = InfiniteList::iterate(1, |x| x + 1).filter(|x| *x > 3);
        assert_eq!(list.head(), Ok(4));
    });
    assert!(logs.contains("skip-forward passed filtered-out elements"));
    assert!(logs.contains("skipped=3"));
}

#[rstest]
fn exhausted_access_is_logged_at_debug() {
    let logs = capture(|| {
        let sentinel: InfiniteList<i32> = InfiniteList::sentinel();
        assert!(sentinel.head().is_err());
    });
    assert!(logs.contains("DEBUG"));
    assert!(logs.contains("no retained element left in the list"));
}

#[rstest]
fn nothing_is_logged_for_evaluated_values() {
    let logs = capture(|| {
        let lazy = Lazy::of(1);
        assert_eq!(lazy.value(), 1);
    });
    assert!(logs.is_empty());
}
