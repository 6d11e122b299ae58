// crates/clipdeck-api/src/client.rs
//
// Blocking REST client over ureq. Always called from the ApiWorker thread,
// never from the UI thread.

use std::time::Duration;

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::files::file_out_url;
use crate::types::{
    ClipPatch, ClipResponse, ExportRequest, JobResponse, MediaResponse, Page, ProjectResponse,
};

/// Backend endpoint configuration. Environment-driven with the dev-server
/// defaults: `CLIPDECK_API_URL` and `CLIPDECK_OWNER`.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub owner:    String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CLIPDECK_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_owned()),
            owner: std::env::var("CLIPDECK_OWNER").unwrap_or_else(|_| "demo-user-1".to_owned()),
        }
    }
}

pub struct ApiClient {
    agent: ureq::Agent,
    base:  String,
    owner: String,
}

impl ApiClient {
    pub fn new(cfg: &ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(15))
            .build();
        Self {
            agent,
            base:  cfg.base_url.trim_end_matches('/').to_owned(),
            owner: cfg.owner.clone(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Absolute URL for a stored media object, for the preview player.
    pub fn asset_url(&self, object_key: &str) -> String {
        let rel = file_out_url(object_key);
        if rel.is_empty() {
            rel
        } else {
            format!("{}{rel}", self.base)
        }
    }

    pub fn project(&self, project_id: &str) -> Result<ProjectResponse> {
        let resp = self
            .agent
            .get(&self.url(&format!("/v1/projects/{project_id}")))
            .query("ownerId", &self.owner)
            .call()
            .context("GET project")?;
        resp.into_json().context("decode project")
    }

    /// One page of a project's clips, newest-first server-side.
    pub fn project_clips(&self, project_id: &str, page: u32, size: u32) -> Result<Page<ClipResponse>> {
        let resp = self
            .agent
            .get(&self.url(&format!("/v1/projects/{project_id}/clips")))
            .query("ownerId", &self.owner)
            .query("page", &page.to_string())
            .query("size", &size.to_string())
            .call()
            .context("GET project clips")?;
        resp.into_json().context("decode clip page")
    }

    pub fn media(&self, id: Uuid) -> Result<MediaResponse> {
        let resp = self
            .agent
            .get(&self.url(&format!("/v1/media/{id}")))
            .call()
            .context("GET media")?;
        resp.into_json().context("decode media")
    }

    /// Persist a trim range server-side.
    pub fn patch_clip(&self, id: Uuid, patch: ClipPatch) -> Result<ClipResponse> {
        let resp = self
            .agent
            .request("PATCH", &self.url(&format!("/v1/clips/{id}")))
            .send_json(patch)
            .context("PATCH clip")?;
        resp.into_json().context("decode patched clip")
    }

    /// Enqueue a render/export job. The response body is the job id as text.
    pub fn start_export(&self, req: &ExportRequest) -> Result<String> {
        let resp = self
            .agent
            .post(&self.url("/v1/render/export"))
            .query("ownerExternalSubject", &self.owner)
            .send_json(req)
            .context("POST export")?;
        let job_id = resp.into_string().context("read export job id")?;
        Ok(job_id.trim().to_owned())
    }

    pub fn job(&self, job_id: &str) -> Result<JobResponse> {
        let resp = self
            .agent
            .get(&self.url(&format!("/v1/jobs/{job_id}")))
            .call()
            .context("GET job")?;
        resp.into_json().context("decode job")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:8080/".into(),
            owner:    "demo-user-1".into(),
        });
        assert_eq!(client.url("/v1/jobs/x"), "http://localhost:8080/v1/jobs/x");
    }

    #[test]
    fn asset_url_joins_base_and_encoded_key() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:8080".into(),
            owner:    "demo-user-1".into(),
        });
        assert_eq!(
            client.asset_url("media/a b.mp4"),
            "http://localhost:8080/v1/files/out/media/a%20b.mp4"
        );
        assert_eq!(client.asset_url(""), "");
    }
}
