// crates/clipdeck-core/src/commands.rs
//
// Every user action in ClipDeck is expressed as an EditorCommand.
// Modules and the keyboard router emit these; app.rs processes them after
// the UI pass. Adding a feature = add a variant here + one match arm there.

use uuid::Uuid;

use crate::style::{Aspect, BrandTemplate, SubtitlePresetId};
use crate::trim::TrimRange;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    // ── Playback ─────────────────────────────────────────────────────────────
    Seek(f64),
    Play,
    Pause,
    TogglePlay,
    SetPlaybackRate(f64),

    // ── Trim ─────────────────────────────────────────────────────────────────
    /// Replace the current range wholesale (nudge buttons, rail drags).
    /// Goes through TrimStore::push so it lands on the undo stack.
    PushTrim(TrimRange),
    /// Set the in-point to the playhead. Dropped when it would not stay
    /// below the out-point.
    MarkIn,
    /// Set the out-point to the playhead (floored at in + 0.05 s). Dropped
    /// when the playhead is not past the in-point.
    MarkOut,
    Undo,
    Redo,
    /// PATCH the current range to the backend as `{startMs, endMs}`.
    SaveTrim,

    // ── Clips ────────────────────────────────────────────────────────────────
    /// Fetch one page of the project's clips. Page 0 replaces the list,
    /// later pages append (load-more).
    LoadClips { page: u32 },
    OpenClip(Uuid),
    CloseClip,

    // ── Style / brand ────────────────────────────────────────────────────────
    SelectPreset(SubtitlePresetId),
    SetAspect(Aspect),
    /// Replace the brand draft; persisted under brandTemplate.v1 on every
    /// edit (the original auto-saves the draft the same way).
    UpdateBrandDraft(BrandTemplate),
    /// Write the draft as the active template for the current project and
    /// start using it for style resolution.
    ApplyBrandToProject,

    // ── Export ───────────────────────────────────────────────────────────────
    /// POST the clip + effective subtitle style to the render endpoint and
    /// begin polling the returned job.
    StartExport,
    DismissNotice,
}
