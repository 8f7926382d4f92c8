//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the pantry listing and its overlays while reading and
//! writing state held in `RwSignal`s.

pub mod delete_dialog;
pub mod notification_bar;
pub mod pantry_listing;
