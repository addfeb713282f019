//! User-facing notifications
//!
//! Actions emit notices; how a notice is rendered (toast, status line, log)
//! is the caller's concern.

/// A user-facing notification emitted by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The operation succeeded.
    Success(String),
    /// The operation failed; the message is already user-readable.
    Failure(String),
}

impl Notice {
    /// Creates a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Creates a failure notice.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Returns the notice message.
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Failure(msg) => msg,
        }
    }

    /// Returns `true` for success notices.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Sink for notices emitted by the synchronization actions.
pub trait Notify: Send + Sync {
    /// Delivers a notice to the user.
    fn notify(&self, notice: Notice);
}

/// A [`Notify`] implementation that writes notices to the log facade.
///
/// Useful for headless callers and as a default while a front end wires up
/// its own toast surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(msg) => log::info!("{}", msg),
            Notice::Failure(msg) => log::warn!("{}", msg),
        }
    }
}
