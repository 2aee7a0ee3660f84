//! Desk reducer: operator intents in, remote commands out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The desk combines the collection, the draft form, and the confirmation
//! gate. [`ArticleDesk::handle`] turns one operator intent into at most one
//! [`Command`] for the gateway; [`ArticleDesk::complete`] folds the result of
//! that command back into state. Neither does I/O, so every workflow can be
//! exercised without a network.
//!
//! ERROR HANDLING
//! ==============
//! Operator mistakes come back as [`DeskError`] and never reach the network.
//! Remote failures are logged here and leave state exactly as it was before
//! the command, including an open block or delete gate.

#[cfg(test)]
#[path = "desk_test.rs"]
mod desk_test;

use tracing::{debug, error, info};

use crate::net::api::ApiError;
use crate::net::types::{Article, ArticleId, ArticleStatus, NewArticle};
use crate::state::collection::{CollectionStore, ListTicket};
use crate::state::draft::{DraftField, DraftForm, ValidationError};
use crate::state::gate::{ActiveGate, GateError};

/// Something the operator asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Re-fetch the current query.
    Refresh,
    /// Replace the title filter and re-fetch.
    Search(String),
    OpenForm,
    CloseForm,
    Edit(DraftField, String),
    Publish,
    RequestReset,
    SelectBlock(ArticleId),
    SelectDelete(ArticleId),
    Confirm,
    Cancel,
}

/// A remote call the desk needs made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    List { ticket: ListTicket, query: String },
    Create(NewArticle),
    SetStatus { id: ArticleId, status: ArticleStatus },
    Remove { id: ArticleId },
}

/// The outcome of a [`Command`].
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    Listed { ticket: ListTicket, query: String, result: Result<Vec<Article>, ApiError> },
    Created(Result<Article, ApiError>),
    StatusSet { id: ArticleId, status: ArticleStatus, result: Result<(), ApiError> },
    Removed { id: ArticleId, result: Result<(), ApiError> },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error("no article with id {0} in the current list")]
    UnknownArticle(ArticleId),

    #[error("the new-article form is not open")]
    FormClosed,
}

/// View state for one mounted article desk.
#[derive(Clone, Debug, Default)]
pub struct ArticleDesk {
    collection: CollectionStore,
    form: DraftForm,
    gate: ActiveGate,
    /// Article whose confirmed block or delete has not completed yet.
    confirming: Option<ArticleId>,
}

impl ArticleDesk {
    /// A fresh desk plus the initial list request.
    #[must_use]
    pub fn mount() -> (Self, Command) {
        let mut desk = Self::default();
        let ticket = desk.collection.issue_ticket();
        let command = Command::List { ticket, query: String::new() };
        (desk, command)
    }

    #[must_use]
    pub fn collection(&self) -> &CollectionStore {
        &self.collection
    }

    #[must_use]
    pub fn form(&self) -> &DraftForm {
        &self.form
    }

    #[must_use]
    pub fn gate(&self) -> &ActiveGate {
        &self.gate
    }

    /// Apply one operator intent.
    ///
    /// # Errors
    ///
    /// Returns a [`DeskError`] when the intent is not valid in the current
    /// state; nothing changes except the inline form error on a failed
    /// publish.
    pub fn handle(&mut self, intent: Intent) -> Result<Option<Command>, DeskError> {
        match intent {
            Intent::Refresh => {
                let ticket = self.collection.issue_ticket();
                Ok(Some(Command::List { ticket, query: self.collection.query().to_owned() }))
            }
            Intent::Search(query) => {
                let ticket = self.collection.set_query(query.clone());
                Ok(Some(Command::List { ticket, query }))
            }
            Intent::OpenForm => {
                self.form.open();
                Ok(None)
            }
            Intent::CloseForm => {
                self.form.close();
                Ok(None)
            }
            Intent::Edit(field, value) => {
                self.require_form()?;
                self.form.edit(field, value);
                Ok(None)
            }
            Intent::Publish => {
                self.require_form()?;
                let body = self.form.begin_publish(&self.collection)?;
                Ok(Some(Command::Create(body)))
            }
            Intent::RequestReset => {
                self.require_form()?;
                self.gate.open(ActiveGate::ResetPending)?;
                Ok(None)
            }
            Intent::SelectBlock(id) => {
                let article = self.lookup(&id)?;
                self.gate.open(ActiveGate::BlockPending(article))?;
                Ok(None)
            }
            Intent::SelectDelete(id) => {
                let article = self.lookup(&id)?;
                self.gate.open(ActiveGate::DeletePending(article))?;
                Ok(None)
            }
            Intent::Confirm => self.confirm(),
            Intent::Cancel => {
                self.gate.take()?;
                self.confirming = None;
                Ok(None)
            }
        }
    }

    fn confirm(&mut self) -> Result<Option<Command>, DeskError> {
        if self.confirming.is_some() {
            return Err(GateError::InFlight.into());
        }
        let command = match &self.gate {
            ActiveGate::Idle => return Err(GateError::NotPending.into()),
            ActiveGate::BlockPending(article) => Some(Command::SetStatus {
                id: article.id.clone(),
                status: article.status.toggled(),
            }),
            ActiveGate::DeletePending(article) => Some(Command::Remove { id: article.id.clone() }),
            ActiveGate::ResetPending => None,
        };
        if command.is_none() {
            self.gate = ActiveGate::Idle;
            self.form.reset();
        }
        self.confirming = self.gate.target().map(|article| article.id.clone());
        Ok(command)
    }

    /// Fold a remote result back into state.
    ///
    /// Returns `true` when state changed.
    pub fn complete(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Listed { ticket, query, result } => match result {
                Ok(articles) => {
                    let count = articles.len();
                    if self.collection.apply_listed(ticket, articles) {
                        debug!(ticket = ticket.value(), %query, count, "article list applied");
                        true
                    } else {
                        debug!(ticket = ticket.value(), %query, "dropping stale article list");
                        false
                    }
                }
                Err(e) => {
                    error!(error = %e, ticket = ticket.value(), %query, "article list request failed");
                    self.collection.settle_failed(ticket);
                    false
                }
            },
            Completion::Created(result) => match result {
                Ok(article) => {
                    info!(id = %article.id, title = %article.title, "article created");
                    self.collection.apply_created(article);
                    self.form.finish_publish();
                    true
                }
                Err(e) => {
                    error!(error = %e, "article create request failed");
                    false
                }
            },
            Completion::StatusSet { id, status, result } => {
                self.finish_confirmed(&id);
                match result {
                    Ok(()) => {
                        info!(%id, %status, "article status changed");
                        self.collection.apply_status_changed(&id, status);
                        self.gate.close_if_targets(&id);
                        true
                    }
                    Err(e) => {
                        error!(error = %e, %id, "article status request failed");
                        false
                    }
                }
            }
            Completion::Removed { id, result } => {
                self.finish_confirmed(&id);
                match result {
                    Ok(()) => {
                        info!(%id, "article deleted");
                        self.collection.apply_removed(&id);
                        self.gate.close_if_targets(&id);
                        true
                    }
                    Err(e) => {
                        error!(error = %e, %id, "article delete request failed");
                        false
                    }
                }
            }
        }
    }

    fn finish_confirmed(&mut self, id: &ArticleId) {
        if self.confirming.as_ref() == Some(id) {
            self.confirming = None;
        }
    }

    fn require_form(&self) -> Result<(), DeskError> {
        if self.form.visible { Ok(()) } else { Err(DeskError::FormClosed) }
    }

    fn lookup(&self, id: &ArticleId) -> Result<Article, DeskError> {
        self.collection
            .get(id)
            .cloned()
            .ok_or_else(|| DeskError::UnknownArticle(id.clone()))
    }
}
