//! Mounted desk session: runs desk commands against the gateway.
//!
//! DESIGN
//! ======
//! A session is created on mount (which fires the initial list request) and
//! dropped on unmount, which aborts any request still in flight. Each
//! command runs on its own task so the operator is never blocked by the
//! network; results come back through a `JoinSet` and are folded into the
//! desk by whoever owns the session, so state only ever changes on one task.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::desk::{ArticleDesk, Command, Completion, DeskError, Intent};
use crate::net::api::ArticleService;

pub struct Session {
    desk: ArticleDesk,
    service: Arc<dyn ArticleService>,
    pending: JoinSet<Completion>,
}

impl Session {
    /// Mount a desk and fire its initial list request.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn mount(service: Arc<dyn ArticleService>) -> Self {
        let (desk, command) = ArticleDesk::mount();
        let mut session = Self { desk, service, pending: JoinSet::new() };
        session.dispatch(command);
        session
    }

    #[must_use]
    pub fn desk(&self) -> &ArticleDesk {
        &self.desk
    }

    /// Number of requests that have not completed yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Apply an operator intent, starting a request if it needs one.
    ///
    /// # Errors
    ///
    /// Returns the [`DeskError`] from the desk; no request is started.
    pub fn apply(&mut self, intent: Intent) -> Result<(), DeskError> {
        if let Some(command) = self.desk.handle(intent)? {
            self.dispatch(command);
        }
        Ok(())
    }

    /// Wait for the next finished request. `None` when nothing is in flight.
    ///
    /// Cancel safe, so it can sit in a `select!` next to operator input.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        loop {
            match self.pending.join_next().await? {
                Ok(completion) => return Some(completion),
                Err(e) => error!(error = %e, "article request task aborted"),
            }
        }
    }

    /// Fold a finished request into the desk. Returns `true` if state changed.
    pub fn complete(&mut self, completion: Completion) -> bool {
        self.desk.complete(completion)
    }

    /// Drain every request in flight, in completion order.
    pub async fn settle(&mut self) {
        while let Some(completion) = self.next_completion().await {
            self.complete(completion);
        }
    }

    fn dispatch(&mut self, command: Command) {
        debug!(?command, "dispatching article request");
        let service = Arc::clone(&self.service);
        self.pending.spawn(async move { execute(service.as_ref(), command).await });
    }
}

/// Run one command against the gateway and package the result.
pub async fn execute(service: &dyn ArticleService, command: Command) -> Completion {
    match command {
        Command::List { ticket, query } => {
            let result = service.list(&query).await;
            Completion::Listed { ticket, query, result }
        }
        Command::Create(body) => Completion::Created(service.create(&body).await),
        Command::SetStatus { id, status } => {
            let result = service.set_status(&id, status).await;
            Completion::StatusSet { id, status, result }
        }
        Command::Remove { id } => {
            let result = service.remove(&id).await;
            Completion::Removed { id, result }
        }
    }
}
