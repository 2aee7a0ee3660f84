//! Networking modules for the remote article store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and defines the `ArticleService` seam, `types`
//! defines the wire schema of the `/posts` resource.

pub mod api;
pub mod types;
