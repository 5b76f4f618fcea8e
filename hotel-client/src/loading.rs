//! Global loading marker for page-level requests
//!
//! Every non-API request holds a [`LoadingGuard`] while it is in flight.
//! The first guard switches the marker on; the last one to drop switches it
//! off. API calls manage their own spinners and bypass the gate.
//!
//! A safety timer forces the marker off if it stays on too long. It does not
//! touch the in-flight counter, so after it fires the marker stays off until
//! the counter drains to zero and a new request starts.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
struct GateState {
    in_flight: usize,
    safety: Option<CancellationToken>,
}

#[derive(Debug)]
struct GateInner {
    state: Mutex<GateState>,
    marker: watch::Sender<bool>,
    safety_timeout: Duration,
}

/// In-flight request counter driving the loading marker
#[derive(Debug, Clone)]
pub struct LoadingGate {
    inner: Arc<GateInner>,
}

impl LoadingGate {
    pub fn new(safety_timeout: Duration) -> Self {
        let (marker, _) = watch::channel(false);
        Self {
            inner: Arc::new(GateInner {
                state: Mutex::new(GateState::default()),
                marker,
                safety_timeout,
            }),
        }
    }

    /// Whether `path` is an API call exempt from the gate
    pub fn is_exempt(path: &str) -> bool {
        path.contains("/api/")
    }

    /// Register a request to `path`; `None` for exempt paths
    pub fn begin(&self, path: &str) -> Option<LoadingGuard> {
        if Self::is_exempt(path) {
            return None;
        }

        let mut state = self.inner.state.lock();
        state.in_flight += 1;
        if state.in_flight == 1 {
            self.inner.marker.send_replace(true);
            state.safety = self.arm_safety_timer();
        }
        tracing::trace!(path, in_flight = state.in_flight, "Loading request started");

        Some(LoadingGuard {
            gate: self.clone(),
        })
    }

    fn arm_safety_timer(&self) -> Option<CancellationToken> {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No tokio runtime, loading safety timer not armed");
            return None;
        };

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let inner = Arc::downgrade(&self.inner);
        let timeout = self.inner.safety_timeout;

        handle.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(timeout) => {
                    if let Some(inner) = inner.upgrade() {
                        let in_flight = inner.state.lock().in_flight;
                        inner.marker.send_replace(false);
                        tracing::warn!(
                            in_flight,
                            timeout_ms = timeout.as_millis() as u64,
                            "Loading marker forced off by safety timer"
                        );
                    }
                }
            }
        });

        Some(token)
    }

    fn end(&self) {
        let mut state = self.inner.state.lock();
        state.in_flight = state.in_flight.saturating_sub(1);
        if state.in_flight == 0 {
            self.inner.marker.send_replace(false);
            if let Some(token) = state.safety.take() {
                token.cancel();
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.inner.marker.borrow()
    }

    pub fn in_flight(&self) -> usize {
        self.inner.state.lock().in_flight
    }

    /// Observe marker changes
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.marker.subscribe()
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

/// Decrements the gate when dropped
#[derive(Debug)]
pub struct LoadingGuard {
    gate: LoadingGate,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.gate.end();
    }
}
