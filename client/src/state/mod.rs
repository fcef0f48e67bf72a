//! Client-side state models.
//!
//! DESIGN
//! ======
//! Plain data plus pure functions, free of Leptos signals, so the list
//! operations and save-panel bookkeeping are testable without a browser.

pub mod save_panel;
pub mod todo;
