//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Primitives (`button` through `textarea`) carry no domain knowledge. Feature
//! views take entity records and callbacks from their page and never fetch
//! data themselves.

pub mod artifact_card;
pub mod badge;
pub mod button;
pub mod card;
pub mod chat_interface;
pub mod info_card;
pub mod judge_bot;
pub mod layout;
pub mod performance_summary;
pub mod progress;
pub mod score_card;
pub mod select;
pub mod skeleton;
pub mod survey_manager;
pub mod tabs;
pub mod textarea;
pub mod variant_card;
