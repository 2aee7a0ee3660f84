//! Confirmation gate for state-changing actions.
//!
//! DESIGN
//! ======
//! One tagged value instead of a flag and target per dialog, so at most one
//! confirmation can be pending at a time. Block and delete gates stay open
//! until their remote call succeeds; the reset gate closes on confirm.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::types::{Article, ArticleId, ArticleStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("another confirmation is already pending")]
    Busy,

    #[error("no confirmation is pending")]
    NotPending,

    #[error("the confirmed request is still in flight")]
    InFlight,
}

/// The confirmation currently shown to the operator, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ActiveGate {
    #[default]
    Idle,
    /// Toggle the publish status of the held article.
    BlockPending(Article),
    /// Delete the held article.
    DeletePending(Article),
    /// Clear the draft form.
    ResetPending,
}

impl ActiveGate {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Article a block or delete gate is holding.
    #[must_use]
    pub fn target(&self) -> Option<&Article> {
        match self {
            Self::BlockPending(article) | Self::DeletePending(article) => Some(article),
            Self::Idle | Self::ResetPending => None,
        }
    }

    /// Question shown while the gate is pending.
    #[must_use]
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::BlockPending(article) => Some(match article.status {
                ArticleStatus::Unpublished => "Are you sure you want to publish this article?",
                ArticleStatus::Published => "Are you sure you want to unpublish this article?",
            }),
            Self::DeletePending(_) => Some("Are you sure you want to delete this article?"),
            Self::ResetPending => Some("Are you sure you want to reset all input values?"),
        }
    }

    /// Open `next` over an idle gate.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Busy`] if another gate is already pending.
    pub fn open(&mut self, next: ActiveGate) -> Result<(), GateError> {
        if !self.is_idle() {
            return Err(GateError::Busy);
        }
        *self = next;
        Ok(())
    }

    /// Close the gate and hand back what it held.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::NotPending`] when the gate is already idle.
    pub fn take(&mut self) -> Result<ActiveGate, GateError> {
        if self.is_idle() {
            return Err(GateError::NotPending);
        }
        Ok(std::mem::take(self))
    }

    /// Close a block/delete gate if it still targets `id`.
    pub fn close_if_targets(&mut self, id: &ArticleId) -> bool {
        if self.target().is_some_and(|article| &article.id == id) {
            *self = Self::Idle;
            return true;
        }
        false
    }
}
