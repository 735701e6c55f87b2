//! Copy-to-clipboard with a timed "copied" indicator

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long the indicator stays on after a successful copy
pub const COPY_INDICATOR_WINDOW: Duration = Duration::from_secs(2);

/// Clipboard errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write rejected: {0}")]
    Rejected(String),

    #[error("No async runtime to reset the copied indicator")]
    NoRuntime,
}

/// Destination for copied text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A one-shot timer that is cancelled on restart and on drop
#[derive(Debug, Default)]
pub struct ScopedTimer {
    handle: Option<JoinHandle<()>>,
}

impl ScopedTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `on_fire` once after `delay`, cancelling any pending run.
    ///
    /// Returns false when called outside a tokio runtime; nothing is scheduled.
    pub fn start<F>(&mut self, delay: Duration, on_fire: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no async runtime, timer not started");
            return false;
        };

        let deadline = Instant::now() + delay;
        self.handle = Some(runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_fire();
        }));
        true
    }

    /// Cancel a pending run, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Copies code to a clipboard and tracks the "copied" indicator
pub struct CopyIndicator<C: ClipboardSink> {
    clipboard: C,
    /// Generation of the open window, 0 when the indicator is off
    active: Arc<AtomicU64>,
    generation: u64,
    timer: ScopedTimer,
    window: Duration,
}

impl<C: ClipboardSink> CopyIndicator<C> {
    pub fn new(clipboard: C) -> Self {
        Self::with_window(clipboard, COPY_INDICATOR_WINDOW)
    }

    pub fn with_window(clipboard: C, window: Duration) -> Self {
        Self {
            clipboard,
            active: Arc::new(AtomicU64::new(0)),
            generation: 0,
            timer: ScopedTimer::new(),
            window,
        }
    }

    /// Write the original, unescaped source to the clipboard.
    ///
    /// On success the indicator turns on and the reset window (re)starts. On
    /// failure the indicator is left as it was and the error is returned for
    /// the caller to show or ignore. Outside a tokio runtime nothing could
    /// reset the indicator, so nothing is written.
    pub fn copy(&mut self, source: &str) -> Result<(), ClipboardError> {
        if tokio::runtime::Handle::try_current().is_err() {
            tracing::warn!("no async runtime, copy skipped");
            return Err(ClipboardError::NoRuntime);
        }

        if let Err(err) = self.clipboard.set_text(source) {
            tracing::warn!(error = %err, "copy to clipboard failed");
            return Err(err);
        }

        self.generation += 1;
        let generation = self.generation;
        self.active.store(generation, Ordering::Release);

        let active = Arc::clone(&self.active);
        if !self.timer.start(self.window, move || close_window(&active, generation)) {
            close_window(&self.active, generation);
            return Err(ClipboardError::NoRuntime);
        }

        tracing::debug!(chars = source.chars().count(), "copied to clipboard");
        Ok(())
    }

    pub fn is_copied(&self) -> bool {
        self.active.load(Ordering::Acquire) != 0
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

/// Turn the indicator off unless a later copy has opened a new window
fn close_window(active: &AtomicU64, generation: u64) {
    let _ = active.compare_exchange(generation, 0, Ordering::AcqRel, Ordering::Acquire);
}
