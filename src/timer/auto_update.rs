//! Auto-update timer implementation

use crate::error::{EyeFilterError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Repeating timer running `tick` on a background thread
pub struct AutoUpdateTimer {
    /// Dropping the sender stops the thread
    stop_sender: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
    interval: Duration,
}

/// Decrements the active counter when the timer thread exits, even on panic
struct ActiveGuard(Arc<AtomicUsize>);

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl AutoUpdateTimer {
    /// Start a timer invoking `tick` every `interval`
    ///
    /// `active` is incremented before this returns and decremented when the
    /// thread exits.
    pub fn start<F>(interval: Duration, active: Arc<AtomicUsize>, mut tick: F) -> Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_sender, stop_receiver) = mpsc::channel::<()>();

        active.fetch_add(1, Ordering::SeqCst);
        let guard = ActiveGuard(Arc::clone(&active));

        let handle = thread::Builder::new()
            .name("auto-update".to_string())
            .spawn(move || {
                let _guard = guard;
                loop {
                    match stop_receiver.recv_timeout(interval) {
                        Err(mpsc::RecvTimeoutError::Timeout) => {
                            debug!("Auto-update tick");
                            tick();
                        }
                        Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("Auto-update thread exiting");
            })
            .map_err(EyeFilterError::TimerSpawnFailed)?;

        info!("Auto-update timer started ({}s interval)", interval.as_secs());

        Ok(Self {
            stop_sender: Some(stop_sender),
            handle: Some(handle),
            interval,
        })
    }

    /// Period between ticks
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the timer thread is still running
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the timer and wait for its thread to exit
    ///
    /// A tick already in progress completes first. Calling this more than once is a no-op.
    pub fn cancel(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        drop(self.stop_sender.take());

        if handle.thread().id() == thread::current().id() {
            // Cancelled from inside a tick; the loop ends on the next wait
            return;
        }
        if handle.join().is_err() {
            warn!("Auto-update thread panicked");
        }
        info!("Auto-update timer cancelled");
    }
}

impl Drop for AutoUpdateTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
