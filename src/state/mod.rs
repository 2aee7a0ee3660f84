//! Client-side state for the article desk.
//!
//! SYSTEM CONTEXT
//! ==============
//! `collection` mirrors the remote list, `draft` holds the create form, and
//! `gate` tracks the one confirmation that may be pending. None of them do
//! I/O; the desk reducer wires them together.

pub mod collection;
pub mod draft;
pub mod gate;
