//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameCommand`] for terminal
//! environments (including terminals without key-release events).

pub mod map;

pub use tui_bombtris_types as types;

pub use map::{handle_key_event, should_quit};
