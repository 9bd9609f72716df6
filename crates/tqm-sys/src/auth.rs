//! Shared-secret confirmation gate for mutating actions.
//!
//! This is a UI soft-gate, not a security boundary: the secret is a fixed
//! configured value that deters casual misuse. It must not be upgraded to a
//! real authentication scheme without a deliberate product decision.

use crate::error::AuthError;

type PendingAction = Box<dyn FnOnce()>;

pub struct AuthGate {
    secret: String,
    pending: Option<PendingAction>,
}

impl AuthGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            pending: None,
        }
    }

    /// Stages `action` to run once the secret is confirmed. At most one
    /// action is staged at a time; a new request replaces a previous one
    /// without running it (last request wins).
    pub fn request(&mut self, action: impl FnOnce() + 'static) {
        self.pending = Some(Box::new(action));
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Runs the staged action exactly once if `attempt` matches the secret.
    /// On mismatch the action stays staged so the prompt can be retried.
    pub fn confirm(&mut self, attempt: &str) -> Result<(), AuthError> {
        if self.pending.is_none() {
            return Err(AuthError::NothingPending);
        }
        if attempt != self.secret {
            return Err(AuthError::WrongSecret);
        }

        // take() before invoking: the action must never run twice even if it
        // re-enters the gate.
        if let Some(action) = self.pending.take() {
            action();
        }
        Ok(())
    }

    /// Discards the staged action without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
