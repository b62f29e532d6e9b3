//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! from page and component logic to improve reuse and testability.

pub mod classes;
pub mod dark_mode;
pub mod format;
pub mod markdown;
pub mod print;
