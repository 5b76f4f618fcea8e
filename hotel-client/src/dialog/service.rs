use std::mem;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::sync::oneshot;

use super::{
    ConfirmationOptions, DialogHandle, DialogId, DialogRole, DialogSurface, DialogView,
    MessageData, RetryHook,
};

enum DialogState<T> {
    Pending(oneshot::Sender<T>),
    Resolved,
}

struct LiveDialog<T> {
    view: DialogView,
    state: DialogState<T>,
    on_retry: Option<RetryHook>,
}

impl<T> LiveDialog<T> {
    /// Pending → Resolved; returns false if already resolved
    fn resolve(&mut self, value: T) -> bool {
        match mem::replace(&mut self.state, DialogState::Resolved) {
            DialogState::Pending(tx) => {
                // The caller may have dropped its handle
                let _ = tx.send(value);
                true
            }
            DialogState::Resolved => false,
        }
    }
}

#[derive(Default)]
struct Inner {
    surface: RwLock<Option<Arc<dyn DialogSurface>>>,
    confirmation: Mutex<Option<LiveDialog<bool>>>,
    message: Mutex<Option<LiveDialog<()>>>,
    scroll_locked: AtomicBool,
    next_id: AtomicU64,
}

impl Inner {
    fn surface(&self) -> Option<Arc<dyn DialogSurface>> {
        self.surface.read().clone()
    }

    fn set_scroll_lock(&self, locked: bool, surface: Option<&Arc<dyn DialogSurface>>) {
        if self.scroll_locked.swap(locked, Ordering::SeqCst) != locked
            && let Some(surface) = surface
        {
            surface.set_scroll_lock(locked);
        }
    }

    /// Resolve the live confirmation if `id` matches it
    fn finish_confirmation(&self, id: DialogId, value: bool) -> bool {
        let taken = {
            let mut slot = self.confirmation.lock();
            let is_live = slot.as_ref().is_some_and(|live| live.view.id == id);
            if is_live { slot.take() } else { None }
        };
        let Some(mut live) = taken else {
            return false;
        };
        live.resolve(value);
        let surface = self.surface();
        if let Some(surface) = &surface {
            surface.dismiss(id);
        }
        self.set_scroll_lock(false, surface.as_ref());
        true
    }

    /// Resolve the live message if `id` matches it
    fn finish_message(&self, id: DialogId, retry: bool) -> bool {
        let taken = {
            let mut slot = self.message.lock();
            let is_live = slot.as_ref().is_some_and(|live| live.view.id == id);
            if is_live { slot.take() } else { None }
        };
        let Some(mut live) = taken else {
            return false;
        };
        if let Some(surface) = self.surface() {
            surface.dismiss(id);
        }
        if retry && let Some(hook) = live.on_retry.take() {
            hook();
        }
        live.resolve(());
        true
    }
}

/// Dispatches confirmation and message dialogs to the attached surface
#[derive(Clone, Default)]
pub struct DialogService {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for DialogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogService")
            .field("surface_attached", &self.has_surface())
            .field("scroll_locked", &self.scroll_locked())
            .finish()
    }
}

impl DialogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rendering surface
    pub fn attach_surface(&self, surface: Arc<dyn DialogSurface>) {
        *self.inner.surface.write() = Some(surface);
    }

    pub fn detach_surface(&self) {
        *self.inner.surface.write() = None;
    }

    pub fn has_surface(&self) -> bool {
        self.inner.surface.read().is_some()
    }

    fn next_id(&self) -> DialogId {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Ask a yes/no question; resolves `true` on confirm
    pub fn show_confirmation(&self, options: ConfirmationOptions) -> DialogHandle<bool> {
        let (tx, rx) = oneshot::channel();

        let Some(surface) = self.inner.surface() else {
            tracing::warn!(text = %options.message, "No dialog surface attached, confirmation auto-cancelled");
            let _ = tx.send(false);
            return DialogHandle::new(None, rx);
        };

        let id = self.next_id();
        let kind = options.kind;
        let view = DialogView {
            id,
            role: DialogRole::Confirmation,
            kind,
            icon: kind.icon(),
            title: options
                .title
                .unwrap_or_else(|| kind.default_title().to_string()),
            message: options.message,
            details: None,
            confirm_label: options
                .confirm_label
                .unwrap_or_else(|| kind.confirm_label().to_string()),
            cancel_label: Some(
                options
                    .cancel_label
                    .unwrap_or_else(|| kind.cancel_label().to_string()),
            ),
            retry: false,
        };

        let previous = self.inner.confirmation.lock().replace(LiveDialog {
            view: view.clone(),
            state: DialogState::Pending(tx),
            on_retry: None,
        });
        if let Some(previous) = previous {
            tracing::debug!(id = previous.view.id, "Confirmation superseded");
            surface.dismiss(previous.view.id);
        }

        surface.render(&view);
        self.inner.set_scroll_lock(true, Some(&surface));
        DialogHandle::new(Some(id), rx)
    }

    /// Show an error / info message; resolves when it is closed
    pub fn show_error(&self, data: MessageData) -> DialogHandle<()> {
        let (tx, rx) = oneshot::channel();

        let Some(surface) = self.inner.surface() else {
            tracing::warn!(text = %data.message, "No dialog surface attached, message dropped");
            let _ = tx.send(());
            return DialogHandle::new(None, rx);
        };

        let id = self.next_id();
        let kind = data.kind;
        let view = DialogView {
            id,
            role: DialogRole::Message,
            kind,
            icon: kind.icon(),
            title: data
                .title
                .unwrap_or_else(|| kind.default_title().to_string()),
            message: data.message,
            details: data.details,
            confirm_label: kind.confirm_label().to_string(),
            cancel_label: None,
            retry: data.on_retry.is_some(),
        };

        let previous = self.inner.message.lock().replace(LiveDialog {
            view: view.clone(),
            state: DialogState::Pending(tx),
            on_retry: data.on_retry,
        });
        if let Some(previous) = previous {
            tracing::debug!(id = previous.view.id, "Message superseded");
            surface.dismiss(previous.view.id);
        }

        surface.render(&view);

        if let Some(delay) = data.auto_close {
            self.schedule_auto_close(id, delay);
        }

        DialogHandle::new(Some(id), rx)
    }

    fn schedule_auto_close(&self, id: DialogId, delay: Duration) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(id, "No tokio runtime, auto-close ignored");
            return;
        };
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = inner.upgrade()
                && inner.finish_message(id, false)
            {
                tracing::debug!(id, "Message auto-closed");
            }
        });
    }

    /// Confirm button; stale ids are ignored
    pub fn confirm(&self, id: DialogId) -> bool {
        let done = self.inner.finish_confirmation(id, true) || self.inner.finish_message(id, false);
        if !done {
            tracing::debug!(id, "Ignoring confirm for stale dialog");
        }
        done
    }

    pub fn cancel(&self, id: DialogId) -> bool {
        let done = self.inner.finish_confirmation(id, false);
        if !done {
            tracing::debug!(id, "Ignoring cancel for stale dialog");
        }
        done
    }

    /// Close button or backdrop click
    pub fn close(&self, id: DialogId) -> bool {
        let done = self.inner.finish_confirmation(id, false) || self.inner.finish_message(id, false);
        if !done {
            tracing::debug!(id, "Ignoring close for stale dialog");
        }
        done
    }

    /// Retry button on a message dialog: runs the retry hook then closes
    pub fn retry(&self, id: DialogId) -> bool {
        let done = self.inner.finish_message(id, true);
        if !done {
            tracing::debug!(id, "Ignoring retry for stale dialog");
        }
        done
    }

    pub fn active_confirmation(&self) -> Option<DialogView> {
        self.inner
            .confirmation
            .lock()
            .as_ref()
            .map(|live| live.view.clone())
    }

    pub fn active_message(&self) -> Option<DialogView> {
        self.inner
            .message
            .lock()
            .as_ref()
            .map(|live| live.view.clone())
    }

    pub fn scroll_locked(&self) -> bool {
        self.inner.scroll_locked.load(Ordering::SeqCst)
    }
}
