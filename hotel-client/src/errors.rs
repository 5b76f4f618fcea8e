//! Mapping request failures to user-facing dialogs

use crate::ClientError;
use crate::dialog::{DialogService, MessageData, ModalKind, RetryHook};
use crate::storage::SecureSession;

/// User-facing classification of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 401: stored token is dropped and the user goes back to login
    SessionExpired,
    /// 403
    AccessDenied,
    /// 404
    NotFound,
    /// 5xx
    ServerError,
    /// No response, or the server says the network failed
    Network,
    Generic,
}

impl FailureKind {
    pub fn of(err: &ClientError) -> Self {
        match err.status() {
            Some(401) => return Self::SessionExpired,
            Some(403) => return Self::AccessDenied,
            Some(404) => return Self::NotFound,
            Some(500..=599) => return Self::ServerError,
            _ => {}
        }
        if err.is_transport() {
            return Self::Network;
        }
        match err {
            ClientError::Api { message, .. } | ClientError::InvalidResponse(message)
                if message.to_lowercase().contains("network") =>
            {
                Self::Network
            }
            _ => Self::Generic,
        }
    }

    /// Whether the dialog offers a retry button
    pub fn offers_retry(&self) -> bool {
        matches!(self, Self::ServerError | Self::Generic)
    }
}

/// What the caller should do after reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    None,
    /// A retry button was shown
    Retry,
    RedirectToLogin,
}

/// Turns [`ClientError`]s into dialogs through the single message slot
#[derive(Debug, Clone)]
pub struct ErrorReporter {
    dialogs: DialogService,
    session: SecureSession,
}

impl ErrorReporter {
    pub fn new(dialogs: DialogService, session: SecureSession) -> Self {
        Self { dialogs, session }
    }

    /// Build the dialog content for `err`
    pub fn message_for(err: &ClientError, category: FailureKind) -> MessageData {
        match category {
            FailureKind::SessionExpired => {
                MessageData::new(ModalKind::Warning, "Your session has expired. Please log in again.")
                    .title("Session expired")
            }
            FailureKind::AccessDenied => {
                MessageData::error("You do not have permission to perform this action.")
                    .title("Access denied")
            }
            FailureKind::NotFound => {
                MessageData::error("The requested resource was not found.").title("Not found")
            }
            FailureKind::ServerError => {
                MessageData::error("The server could not complete the request.")
                    .title("Server error")
                    .details(err.to_string())
            }
            FailureKind::Network => MessageData::error(
                "Could not reach the server. Check your connection.",
            )
            .title("Network error"),
            FailureKind::Generic => MessageData::error(api_message(err)).title("Error"),
        }
    }

    /// Show a dialog for `err` and apply its side effects
    ///
    /// `on_retry` is attached only for categories that offer a retry.
    pub fn report(&self, err: &ClientError, on_retry: Option<RetryHook>) -> ErrorAction {
        let category = FailureKind::of(err);
        tracing::warn!(error = %err, ?category, "Request failed");

        let mut data = Self::message_for(err, category);
        let mut action = ErrorAction::None;

        match category {
            FailureKind::SessionExpired => {
                self.session.clear_token();
                action = ErrorAction::RedirectToLogin;
            }
            c if c.offers_retry() => {
                if let Some(hook) = on_retry {
                    data = data.on_retry(hook);
                    action = ErrorAction::Retry;
                }
            }
            _ => {}
        }

        // Outcome is not awaited; the dialog lives until the user closes it
        let _ = self.dialogs.show_error(data);
        action
    }
}

/// Server-supplied message for an API error, the display text otherwise
fn api_message(err: &ClientError) -> String {
    match err {
        ClientError::Api { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
