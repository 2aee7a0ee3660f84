//! Article collection state: the local projection of the remote `/posts` list.
//!
//! DESIGN
//! ======
//! Every mutation goes through one of the `apply_*` reducers so the
//! collection can only change in response to a confirmed remote result.
//! List requests carry a [`ListTicket`]; a response older than the newest
//! settled one (applied or failed) is dropped, so a slow earlier search
//! cannot overwrite the results of a later one.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use std::collections::HashSet;

use crate::net::types::{Article, ArticleId, ArticleStatus};

/// Sequence number handed out for each list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListTicket(u64);

impl ListTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Current articles plus the active search query.
#[derive(Clone, Debug, Default)]
pub struct CollectionStore {
    articles: Vec<Article>,
    query: String,
    issued: u64,
    applied: Option<ListTicket>,
    settled: Option<ListTicket>,
}

impl CollectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Articles in server order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Active title filter. Empty means "all".
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Newest ticket whose response replaced the collection.
    #[must_use]
    pub fn applied_ticket(&self) -> Option<ListTicket> {
        self.applied
    }

    /// Replace the query and hand out a ticket for the refresh it triggers.
    pub fn set_query(&mut self, query: impl Into<String>) -> ListTicket {
        self.query = query.into();
        self.issue_ticket()
    }

    /// Hand out a ticket for a refresh of the current query.
    pub fn issue_ticket(&mut self) -> ListTicket {
        self.issued += 1;
        ListTicket(self.issued)
    }

    /// Replace the whole collection with a list response.
    ///
    /// Returns `false` (and leaves the collection alone) when a newer
    /// request has already settled, successfully or not. Duplicate ids keep
    /// their first occurrence.
    pub fn apply_listed(&mut self, ticket: ListTicket, articles: Vec<Article>) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        let mut seen = HashSet::new();
        self.articles = articles
            .into_iter()
            .filter(|article| seen.insert(article.id.clone()))
            .collect();
        self.applied = Some(ticket);
        true
    }

    /// Record a failed list request. Older responses still in flight are
    /// dropped from now on; the collection itself is left alone.
    pub fn settle_failed(&mut self, ticket: ListTicket) {
        self.settle(ticket);
    }

    fn settle(&mut self, ticket: ListTicket) -> bool {
        if self.settled.is_some_and(|settled| settled >= ticket) {
            return false;
        }
        self.settled = Some(ticket);
        true
    }

    /// Append a freshly created article. An existing id is replaced in place.
    pub fn apply_created(&mut self, article: Article) {
        if let Some(slot) = self.articles.iter_mut().find(|a| a.id == article.id) {
            *slot = article;
        } else {
            self.articles.push(article);
        }
    }

    /// Set the status of the article with `id`. Returns `false` if absent.
    pub fn apply_status_changed(&mut self, id: &ArticleId, status: ArticleStatus) -> bool {
        match self.articles.iter_mut().find(|a| &a.id == id) {
            Some(article) => {
                article.status = status;
                true
            }
            None => false,
        }
    }

    /// Drop the article with `id`, keeping the order of the rest.
    pub fn apply_removed(&mut self, id: &ArticleId) -> Option<Article> {
        let index = self.articles.iter().position(|a| &a.id == id)?;
        Some(self.articles.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| &a.id == id)
    }

    /// Exact title match against the current collection.
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.articles.iter().any(|a| a.title == title)
    }

    /// Find an article by the id text shown to the operator.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<&Article> {
        let token = token.trim();
        self.articles.iter().find(|a| a.id.to_string() == token)
    }
}
