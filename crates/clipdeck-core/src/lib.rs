// crates/clipdeck-core/src/lib.rs
// Pure editor state — no egui, no HTTP, no threads.
// Serializable via serde. Used by both clipdeck-ui and clipdeck-api.

pub mod commands;
pub mod helpers;
pub mod keys;
pub mod player;
pub mod state;
pub mod store;
pub mod style;
pub mod trim;
