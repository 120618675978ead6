//! Cancellable countdown ticker.
//!
//! A [`Ticker`] owns a background thread that sends one message per
//! interval, tagged with the session generation it was started for. It
//! stops when cancelled, when dropped, or when the receiver goes away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::trace;

/// Handle to a running tick thread.
#[derive(Debug)]
pub struct Ticker {
    generation: u64,
    cancelled: Arc<AtomicBool>,
}

impl Ticker {
    /// Start sending `wrap(generation)` on `tx` every `interval`.
    pub fn spawn<T, F>(interval: Duration, generation: u64, tx: Sender<T>, wrap: F) -> Self
    where
        T: Send + 'static,
        F: Fn(u64) -> T + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::Acquire) {
                return;
            }
            trace!(generation, "tick");
            // Receiver gone: nobody is listening any more
            if tx.send(wrap(generation)).is_err() {
                return;
            }
        });

        Self {
            generation,
            cancelled,
        }
    }

    /// Generation this ticker tags its messages with.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Stop the thread. At most one already-scheduled message may still
    /// arrive; it carries the old generation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
