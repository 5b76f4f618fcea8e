//! Confirmation and message dialogs
//!
//! [`DialogService`] owns two slots: one confirmation and one message
//! (error / info). A new request in a slot tears down whatever was shown
//! there; the superseded caller's [`DialogHandle`] resolves to
//! [`DialogError::Abandoned`] instead of a user outcome.
//!
//! Rendering is delegated to a [`DialogSurface`]. Until one is attached,
//! every request resolves at once with the cancel outcome.

mod kind;
mod service;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;

pub use kind::ModalKind;
pub use service::DialogService;

/// Identifier of a rendered dialog instance
pub type DialogId = u64;

/// Callback run when the user presses "Retry" on a message dialog
pub type RetryHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DialogError {
    /// Replaced by a newer dialog in the same slot before the user answered
    #[error("dialog was replaced before it was answered")]
    Abandoned,
}

/// Options for a yes/no confirmation
#[derive(Debug, Clone, Default)]
pub struct ConfirmationOptions {
    pub kind: ModalKind,
    pub title: Option<String>,
    pub message: String,
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
}

impl ConfirmationOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: ModalKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }
}

/// Content of an error / info dialog
#[derive(Clone, Default)]
pub struct MessageData {
    pub kind: ModalKind,
    pub title: Option<String>,
    pub message: String,
    pub details: Option<String>,
    /// Close automatically after this delay
    pub auto_close: Option<Duration>,
    pub on_retry: Option<RetryHook>,
}

impl fmt::Debug for MessageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageData")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("details", &self.details)
            .field("auto_close", &self.auto_close)
            .field("retry", &self.on_retry.is_some())
            .finish()
    }
}

impl MessageData {
    pub fn new(kind: ModalKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ModalKind::Error, message)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn auto_close(mut self, delay: Duration) -> Self {
        self.auto_close = Some(delay);
        self
    }

    pub fn on_retry(mut self, hook: RetryHook) -> Self {
        self.on_retry = Some(hook);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogRole {
    Confirmation,
    Message,
}

/// What the surface draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub id: DialogId,
    pub role: DialogRole,
    pub kind: ModalKind,
    pub icon: &'static str,
    pub title: String,
    pub message: String,
    pub details: Option<String>,
    pub confirm_label: String,
    /// Only confirmations have a cancel button
    pub cancel_label: Option<String>,
    pub retry: bool,
}

/// Rendering attachment point
pub trait DialogSurface: Send + Sync {
    fn render(&self, view: &DialogView);
    fn dismiss(&self, id: DialogId);
    fn set_scroll_lock(&self, _locked: bool) {}
}

/// Pending answer to a dialog
///
/// Await it for the outcome. Dropping it does not close the dialog.
#[derive(Debug)]
pub struct DialogHandle<T> {
    id: Option<DialogId>,
    rx: oneshot::Receiver<T>,
}

impl<T> DialogHandle<T> {
    pub(crate) fn new(id: Option<DialogId>, rx: oneshot::Receiver<T>) -> Self {
        Self { id, rx }
    }

    /// Instance id, `None` when nothing was rendered
    pub fn id(&self) -> Option<DialogId> {
        self.id
    }
}

impl<T> Future for DialogHandle<T> {
    type Output = Result<T, DialogError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|r| r.map_err(|_| DialogError::Abandoned))
    }
}
