//! Page and shell state models.
//!
//! ARCHITECTURE
//! ============
//! `view_state` drives every select-then-fetch page, `chat` holds the agent
//! conversation, and `ui` carries shell chrome shared through context.

pub mod chat;
pub mod ui;
pub mod view_state;
