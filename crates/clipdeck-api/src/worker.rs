// crates/clipdeck-api/src/worker.rs
//
// ApiWorker: owns the request channel and the blocking HTTP thread.
// All public API that clipdeck-ui calls lives here.

use std::thread;

use anyhow::Result;
use crossbeam_channel::{bounded, Receiver, Sender};
use uuid::Uuid;

use clipdeck_core::style::SubtitleStyle;

use crate::client::{ApiClient, ApiConfig};
use crate::types::{
    ClipPatch, ClipResponse, ExportRequest, JobResponse, MediaResponse, Page, ProjectResponse,
};

// ── Request / result types ────────────────────────────────────────────────────

/// One unit of work for the HTTP thread. Every variant maps to exactly one
/// backend call; the thread answers each with an [`ApiResult`].
#[derive(Debug)]
pub enum ApiRequest {
    Project(String),
    ProjectClips { project_id: String, page: u32, size: u32 },
    Media(Uuid),
    SaveTrim { clip_id: Uuid, start_ms: i64, end_ms: i64 },
    StartExport { clip_id: Uuid, style: SubtitleStyle },
    PollJob(String),
    /// Poison-pill: the thread drops its client and exits.
    Shutdown,
}

#[derive(Debug)]
pub enum ApiResult {
    Project(ProjectResponse),
    ClipPage(Page<ClipResponse>),
    Media(MediaResponse),
    TrimSaved(ClipResponse),
    ExportStarted { job_id: String },
    Job(JobResponse),
    /// Any request that failed. `context` names the operation for the notice
    /// banner; the request itself is not retried.
    Failed { context: String, msg: String },
}

// ── ApiWorker ─────────────────────────────────────────────────────────────────

pub struct ApiWorker {
    tx:     Sender<ApiRequest>,
    /// Drained by `AppContext::ingest_api_results` once per frame.
    pub rx: Receiver<ApiResult>,
    owner:  String,
    base:   String,
}

impl ApiWorker {
    pub fn new(cfg: ApiConfig) -> Self {
        let (tx, req_rx) = bounded::<ApiRequest>(64);
        let (res_tx, rx) = bounded::<ApiResult>(64);
        let owner = cfg.owner.clone();
        let base = cfg.base_url.trim_end_matches('/').to_owned();

        thread::spawn(move || {
            let client = ApiClient::new(&cfg);
            while let Ok(req) = req_rx.recv() {
                if matches!(req, ApiRequest::Shutdown) {
                    return;
                }
                let out = handle(&client, req);
                if res_tx.send(out).is_err() {
                    return; // UI side gone
                }
            }
        });

        Self { tx, rx, owner, base }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Absolute URL for a stored media object, for the preview player.
    pub fn asset_url(&self, object_key: &str) -> String {
        let rel = crate::files::file_out_url(object_key);
        if rel.is_empty() {
            rel
        } else {
            format!("{}{rel}", self.base)
        }
    }

    /// Queue a request. Drops it silently when the queue is full — the UI
    /// re-issues list loads and job polls on its own cadence, so a dropped
    /// request self-heals on the next frame.
    pub fn request(&self, req: ApiRequest) {
        let _ = self.tx.try_send(req);
    }

    pub fn shutdown(&self) {
        let _ = self.tx.try_send(ApiRequest::Shutdown);
    }
}

fn handle(client: &ApiClient, req: ApiRequest) -> ApiResult {
    match req {
        ApiRequest::Project(project_id) => wrap("load project", || {
            Ok(ApiResult::Project(client.project(&project_id)?))
        }),
        ApiRequest::ProjectClips { project_id, page, size } => wrap("load clips", || {
            Ok(ApiResult::ClipPage(client.project_clips(&project_id, page, size)?))
        }),
        ApiRequest::Media(id) => wrap("load media", || Ok(ApiResult::Media(client.media(id)?))),
        ApiRequest::SaveTrim { clip_id, start_ms, end_ms } => wrap("save trim", || {
            let patch = ClipPatch { start_ms, end_ms };
            Ok(ApiResult::TrimSaved(client.patch_clip(clip_id, patch)?))
        }),
        ApiRequest::StartExport { clip_id, style } => wrap("start export", || {
            let req = ExportRequest { clip_id, subtitle_style: style, profile: None };
            Ok(ApiResult::ExportStarted { job_id: client.start_export(&req)? })
        }),
        ApiRequest::PollJob(job_id) => {
            wrap("poll job", || Ok(ApiResult::Job(client.job(&job_id)?)))
        }
        ApiRequest::Shutdown => unreachable!("handled by the worker loop"),
    }
}

fn wrap(context: &str, f: impl FnOnce() -> Result<ApiResult>) -> ApiResult {
    match f() {
        Ok(out) => out,
        Err(e) => ApiResult::Failed { context: context.to_owned(), msg: format!("{e:#}") },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worker thread behavior against a live backend is exercised manually;
    // here we pin the cheap invariants only.

    #[test]
    fn asset_url_is_empty_for_blank_key() {
        let worker = ApiWorker::new(ApiConfig {
            base_url: "http://localhost:9".into(),
            owner:    "demo-user-1".into(),
        });
        assert_eq!(worker.asset_url(""), "");
        assert_eq!(
            worker.asset_url("media/clip.mp4"),
            "http://localhost:9/v1/files/out/media/clip.mp4"
        );
        worker.shutdown();
    }

    #[test]
    fn shutdown_is_idempotent() {
        let worker = ApiWorker::new(ApiConfig {
            base_url: "http://localhost:9".into(),
            owner:    "demo-user-1".into(),
        });
        worker.shutdown();
        worker.shutdown();
    }
}
