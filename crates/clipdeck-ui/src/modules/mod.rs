// crates/clipdeck-ui/src/modules/mod.rs
//
// Module registry. To add a new panel:
//   1. Create modules/mypanel.rs implementing EditorModule
//   2. Add `pub mod mypanel;` below
//   3. Give it a panel slot in app.rs

pub mod brand_module;
pub mod clips;
pub mod export_module;
pub mod preview_module;
pub mod subtitle_module;
pub mod trim_module;

use egui::Ui;

use clipdeck_core::commands::EditorCommand;
use clipdeck_core::state::EditorState;

use crate::context::AppContext;

/// Every editor panel implements this trait.
/// Modules read state, emit commands — they never mutate state directly.
/// `ctx` exposes read-only runtime data the serializable state doesn't
/// carry (the fetched clip list, paging counters).
pub trait EditorModule {
    fn name(&self) -> &str;
    fn ui(
        &mut self,
        ui:    &mut Ui,
        state: &EditorState,
        ctx:   &AppContext,
        cmd:   &mut Vec<EditorCommand>,
    );
}
