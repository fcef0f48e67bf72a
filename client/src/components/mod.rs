//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of the to-do page and reach shared services
//! (the storage backend) through Leptos context.

pub mod save_panel;
pub mod task_item;
