//! TUI Bombtris (workspace facade crate).
//!
//! This package keeps the `tui_bombtris::{core,term,input,audio,store,types}` public
//! API stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_bombtris_audio as audio;
pub use tui_bombtris_core as core;
pub use tui_bombtris_input as input;
pub use tui_bombtris_store as store;
pub use tui_bombtris_term as term;
pub use tui_bombtris_types as types;
