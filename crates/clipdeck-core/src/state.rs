// crates/clipdeck-core/src/state.rs
// Editor view state — no egui, no HTTP handles, no threads.
// Serializable via serde; runtime-only fields are #[serde(skip)].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::style::{Aspect, BrandTemplate, SubtitlePresetId};
use crate::trim::TrimRange;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient banner shown in the top bar (save confirmations, network
/// failures). Dismissed explicitly by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditorState {
    /// Project whose clips are browsed. The backend scopes clip lists and
    /// applied templates by project id.
    pub project_id: String,
    /// Owner subject sent with every backend call.
    pub owner:      String,

    pub aspect:    Aspect,
    pub preset_id: SubtitlePresetId,

    /// Active (applied) brand template, if any. Loaded from durable storage
    /// on startup; absence means no override layer.
    pub brand:       Option<BrandTemplate>,
    /// Work-in-progress template edited in the Brand panel.
    pub brand_draft: BrandTemplate,

    // ── Runtime-only (rebuilt every session) ─────────────────────────────────
    /// Title of the current project, fetched on startup. Empty until the
    /// backend answers; the top bar falls back to the id.
    #[serde(skip)]
    pub project_title:     String,
    #[serde(skip)]
    pub active_clip:       Option<Uuid>,
    #[serde(skip)]
    pub active_clip_title: String,
    /// Duration of the active clip's selected media, seconds. 0 until known.
    #[serde(skip)]
    pub clip_duration:     f64,
    #[serde(skip)]
    pub current_time:      f64,
    #[serde(skip)]
    pub is_playing:        bool,
    #[serde(skip)]
    pub playback_rate:     f64,

    /// Mirror of TrimStore::current for read-only module rendering.
    /// Written by app.rs::sync_trim_view after every command pass.
    #[serde(skip)]
    pub trim:     Option<TrimRange>,
    /// Undo/redo stack depths, synced the same way so modules can
    /// enable/disable buttons without touching the store.
    #[serde(skip)]
    pub undo_len: usize,
    #[serde(skip)]
    pub redo_len: usize,

    #[serde(skip)]
    pub notice:          Option<Notice>,
    /// True between SaveTrim and the worker's TrimSaved/Failed result.
    #[serde(skip)]
    pub saving:          bool,
    /// Render job currently being polled, if any.
    #[serde(skip)]
    pub export_job:      Option<String>,
    /// 0..=1 from the job poller while a render job runs.
    #[serde(skip)]
    pub export_progress: Option<f32>,
    #[serde(skip)]
    pub last_export_job: Option<String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            project_id:        "1".to_owned(),
            owner:             "demo-user-1".to_owned(),
            aspect:            Aspect::Vertical,
            preset_id:         SubtitlePresetId::TiktokPop,
            brand:             None,
            brand_draft:       BrandTemplate::default(),
            project_title:     String::new(),
            active_clip:       None,
            active_clip_title: String::new(),
            clip_duration:     0.0,
            current_time:      0.0,
            is_playing:        false,
            playback_rate:     1.0,
            trim:              None,
            undo_len:          0,
            redo_len:          0,
            notice:            None,
            saving:            false,
            export_job:        None,
            export_progress:   None,
            last_export_job:   None,
        }
    }
}

impl EditorState {
    pub fn has_clip(&self) -> bool {
        self.active_clip.is_some()
    }
}
