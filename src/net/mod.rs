//! Networking modules for the pantry backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `subscription` makes in-flight fetches
//! cancellable, `error` is the fetch failure taxonomy, and `types` defines
//! the wire schema.

pub mod api;
pub mod error;
pub mod subscription;
pub mod types;
