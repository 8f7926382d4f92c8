//! Component-local state for the pantry page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pantry` holds fetched collections and the pure transforms applied to
//! them; `notification` holds the transient message bar. Both are wrapped in
//! `RwSignal`s and provided through Leptos context.

pub mod notification;
pub mod pantry;
