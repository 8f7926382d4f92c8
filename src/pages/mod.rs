//! Route-level page components.

pub mod pantry;
