//! Article desk: list, filter, create, block, and delete articles held by a
//! remote `/posts` store, with confirmation before every destructive step.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` holds the pure view state, `desk` reduces operator intents and
//! remote results over it, `net` talks to the store, `session` runs requests
//! for a mounted desk, and `console` is the terminal front end.

pub mod config;
pub mod console;
pub mod desk;
pub mod net;
pub mod session;
pub mod state;
