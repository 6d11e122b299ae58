// crates/clipdeck-ui/src/context.rs
//
// AppContext owns all runtime handles that are NOT part of the serializable
// editor state. ClipDeckApp holds one of these plus an EditorState and the
// module list — nothing else.
//
//   AppContext
//     ├── api        — the HTTP worker + result channel
//     ├── kv         — durable key/value store (trim ranges, brand drafts)
//     ├── player     — wall-clock playback model
//     └── clip/page/trim bookkeeping for the browser and the editor

use std::time::Instant;

use crossbeam_channel::Receiver;
use eframe::egui;

use clipdeck_api::types::{ClipResponse, JobStatus};
use clipdeck_api::{ApiResult, ApiWorker};
use clipdeck_core::player::PlayerAdapter;
use clipdeck_core::state::{EditorState, Notice};
use clipdeck_core::store::KvStore;
use clipdeck_core::trim::TrimStore;

use crate::clipdeck_log;
use crate::player_clock::ClockPlayer;

/// Clips fetched per page of the browser list.
pub const CLIPS_PAGE_SIZE: u32 = 20;
/// Job poll cadence while an export runs, matching the backend's progress
/// update granularity.
pub const JOB_POLL_MS: u64 = 750;

pub struct AppContext {
    pub api:    ApiWorker,
    pub kv:     Box<dyn KvStore>,
    pub player: ClockPlayer,
    /// Playhead updates emitted by the player each tick.
    pub time_rx: Receiver<f64>,

    // ── Clip browser ─────────────────────────────────────────────────────────
    pub clips:         Vec<ClipResponse>,
    pub clips_page:    u32,
    pub total_pages:   u32,
    pub loading_clips: bool,

    // ── Active clip ──────────────────────────────────────────────────────────
    pub active_clip: Option<ClipResponse>,
    /// Trim history for the active clip. None whenever no clip is open.
    pub trim_store:  Option<TrimStore>,

    last_job_poll: Option<Instant>,
}

impl AppContext {
    pub fn new(api: ApiWorker, kv: Box<dyn KvStore>) -> Self {
        let mut player = ClockPlayer::new();
        let time_rx = player.time_updates();
        Self {
            api,
            kv,
            player,
            time_rx,
            clips:         Vec::new(),
            clips_page:    0,
            total_pages:   0,
            loading_clips: false,
            active_clip:   None,
            trim_store:    None,
            last_job_poll: None,
        }
    }

    /// Drain the ApiWorker result channel into context fields and state.
    /// Called once per frame from `app::poll_api` — the single translation
    /// layer between raw worker output and UI-visible state.
    pub fn ingest_api_results(&mut self, state: &mut EditorState, ctx: &egui::Context) {
        while let Ok(result) = self.api.rx.try_recv() {
            match result {
                ApiResult::Project(project) => {
                    state.project_title = project.title;
                    ctx.request_repaint();
                }

                ApiResult::ClipPage(page) => {
                    if page.number == 0 {
                        self.clips = page.content;
                    } else {
                        self.clips.extend(page.content);
                    }
                    self.clips_page = page.number;
                    self.total_pages = page.total_pages;
                    self.loading_clips = false;
                    ctx.request_repaint();
                }

                ApiResult::Media(media) => {
                    // The clip list already carries a duration; the media
                    // record is authoritative when it has one.
                    let matches_active = self
                        .active_clip
                        .as_ref()
                        .map(|c| c.media_id == media.id)
                        .unwrap_or(false);
                    if matches_active {
                        if let Some(ms) = media.duration_ms {
                            if ms > 0 {
                                state.clip_duration = ms as f64 / 1000.0;
                                self.player.load(state.clip_duration);
                                if let Some(ts) = &self.trim_store {
                                    self.player.seek(ts.current().in_s);
                                    state.current_time = self.player.current_time();
                                }
                            }
                        }
                    }
                }

                ApiResult::TrimSaved(clip) => {
                    state.saving = false;
                    state.notice = Some(Notice::info("Trim saved"));
                    if let Some(entry) = self.clips.iter_mut().find(|c| c.id == clip.id) {
                        *entry = clip.clone();
                    }
                    if self.active_clip.as_ref().map(|c| c.id) == Some(clip.id) {
                        self.active_clip = Some(clip);
                    }
                    ctx.request_repaint();
                }

                ApiResult::ExportStarted { job_id } => {
                    clipdeck_log!("[export] job started: {job_id}");
                    state.export_job = Some(job_id);
                    state.export_progress = Some(0.0);
                    self.last_job_poll = None;
                    ctx.request_repaint();
                }

                ApiResult::Job(job) => {
                    let ours = state.export_job.as_deref() == Some(job.id.to_string().as_str());
                    if !ours {
                        continue; // stale poll from a dismissed job
                    }
                    match job.status {
                        JobStatus::Queued | JobStatus::Running => {
                            state.export_progress = Some(job.progress.clamp(0.0, 1.0));
                        }
                        JobStatus::Complete => {
                            state.export_progress = Some(1.0);
                            state.last_export_job = state.export_job.take();
                            state.notice = Some(Notice::info("Export complete"));
                        }
                        JobStatus::Failed => {
                            let why = job
                                .error
                                .map(|e| e.message.unwrap_or(e.code))
                                .unwrap_or_else(|| "unknown error".into());
                            state.export_job = None;
                            state.export_progress = None;
                            state.notice = Some(Notice::error(format!("Export failed: {why}")));
                        }
                    }
                    ctx.request_repaint();
                }

                ApiResult::Failed { context, msg } => {
                    clipdeck_log!("[api] {context} failed: {msg}");
                    state.saving = false;
                    self.loading_clips = false;
                    state.notice = Some(Notice::error(format!("{context}: {msg}")));
                    ctx.request_repaint();
                }
            }
        }
    }

    /// Re-issue a job poll on the fixed cadence while an export is running,
    /// and keep the UI repainting between polls so progress stays live.
    pub fn poll_export_job(&mut self, state: &EditorState, ctx: &egui::Context) {
        let Some(job_id) = &state.export_job else {
            self.last_job_poll = None;
            return;
        };
        let due = self
            .last_job_poll
            .map(|t| t.elapsed().as_millis() as u64 >= JOB_POLL_MS)
            .unwrap_or(true);
        if due {
            self.api.request(clipdeck_api::ApiRequest::PollJob(job_id.clone()));
            self.last_job_poll = Some(Instant::now());
        }
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
