//! Light/dark preference tracking for the API reference viewer.

use axum::http::HeaderMap;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Client hint carrying the user's color scheme preference.
pub const PREFERS_COLOR_SCHEME_HEADER: &str = "sec-ch-prefers-color-scheme";

/// A change of the `(prefers-color-scheme: dark)` media query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaQueryEvent {
    pub matches: bool,
}

impl MediaQueryEvent {
    /// Derive the preference from the request's client hint. Absent or unknown means light.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let matches = headers
            .get(PREFERS_COLOR_SCHEME_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim().trim_matches('"').eq_ignore_ascii_case("dark"))
            .unwrap_or(false);
        MediaQueryEvent { matches }
    }
}

/// The environment's preference. Every `set` is delivered to mounted listeners.
#[derive(Debug)]
pub struct PreferenceSignal {
    tx: watch::Sender<MediaQueryEvent>,
}

impl PreferenceSignal {
    pub fn new(initial_dark: bool) -> Self {
        let (tx, _) = watch::channel(MediaQueryEvent { matches: initial_dark });
        PreferenceSignal { tx }
    }

    pub fn set(&self, dark: bool) {
        self.tx.send_replace(MediaQueryEvent { matches: dark });
    }

    fn subscribe(&self) -> watch::Receiver<MediaQueryEvent> {
        self.tx.subscribe()
    }
}

/// Local dark-mode flag fed by preference changes; the last preference wins.
#[derive(Clone, Debug)]
pub struct ColorSchemeListener {
    dark_mode: Arc<watch::Sender<bool>>,
}

impl Default for ColorSchemeListener {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeListener {
    pub fn new() -> Self {
        let (dark_mode, _) = watch::channel(false);
        ColorSchemeListener {
            dark_mode: Arc::new(dark_mode),
        }
    }

    pub fn handle(&self, event: MediaQueryEvent) {
        tracing::debug!(dark = event.matches, "color scheme changed");
        self.dark_mode.send_replace(event.matches);
    }

    pub fn dark_mode(&self) -> bool {
        *self.dark_mode.borrow()
    }

    /// Receiver that observes every update of the flag.
    pub fn watch(&self) -> watch::Receiver<bool> {
        self.dark_mode.subscribe()
    }

    /// Start forwarding changes of `signal`. Only changes after mounting are delivered.
    /// Must be called inside a tokio runtime.
    pub fn mount(&self, signal: &PreferenceSignal) -> Subscription {
        let mut rx = signal.subscribe();
        rx.mark_unchanged();
        let listener = self.clone();
        let task = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let event = *rx.borrow_and_update();
                listener.handle(event);
            }
        });
        Subscription { task }
    }
}

/// Live subscription; dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Subscription {
    pub fn unmount(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
