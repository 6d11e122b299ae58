// crates/clipdeck-api/src/types.rs
//
// Wire shapes for the backend REST API. Field names follow the server's
// camelCase JSON; list endpoints use the Page envelope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clipdeck_core::style::SubtitleStyle;

/// Paginated list envelope: `{content, number, size, totalElements, totalPages}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content:        Vec<T>,
    pub number:         u32,
    pub size:           u32,
    pub total_elements: u64,
    pub total_pages:    u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClipStatus {
    Suggested,
    NeedsEdit,
    Approved,
    Rejected,
    Rendering,
    Ready,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipResponse {
    pub id:          Uuid,
    pub media_id:    Uuid,
    pub title:       String,
    pub start_ms:    i64,
    pub end_ms:      i64,
    pub duration_ms: i64,
    #[serde(default)]
    pub score:       Option<f64>,
    pub status:      ClipStatus,
    #[serde(default)]
    pub thumb_url:   Option<String>,
    #[serde(default)]
    pub tags:        Option<Vec<String>>,
}

impl ClipResponse {
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub id:          Uuid,
    pub owner_id:    Uuid,
    #[serde(default)]
    pub object_key:  Option<String>,
    #[serde(default)]
    pub duration_ms: Option<i64>,
    pub status:      String,
    pub source:      String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id:                     Uuid,
    pub owner_id:               Uuid,
    pub owner_external_subject: String,
    pub title:                  String,
    pub created_at:             String,
    #[serde(default)]
    pub template_id:            Option<Uuid>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Queued,
    Running,
    Complete,
    Failed,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobError {
    pub code:    String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id:       Uuid,
    #[serde(rename = "type")]
    pub job_type: String,
    pub status:   JobStatus,
    pub progress: f32,
    #[serde(default)]
    pub error:    Option<JobError>,
}

impl JobResponse {
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, JobStatus::Complete | JobStatus::Failed)
    }
}

/// Body of `PATCH /v1/clips/{id}` — the trim range in milliseconds.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipPatch {
    pub start_ms: i64,
    pub end_ms:   i64,
}

/// Body of `POST /v1/render/export`. `subtitle_style` is the effective
/// (brand-resolved) style; `profile` is reserved and always null today.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub clip_id:        Uuid,
    pub subtitle_style: SubtitleStyle,
    pub profile:        Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_of_clips_deserializes() {
        let raw = r#"{
            "content": [{
                "id": "11111111-2222-3333-4444-555555555555",
                "mediaId": "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee",
                "title": "Hook about pricing",
                "startMs": 12000,
                "endMs": 41000,
                "durationMs": 29000,
                "score": 0.87,
                "status": "NEEDS_EDIT",
                "thumbUrl": null,
                "tags": ["pricing"]
            }],
            "number": 0,
            "size": 24,
            "totalElements": 1,
            "totalPages": 1
        }"#;
        let page: Page<ClipResponse> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.total_pages, 1);
        let clip = &page.content[0];
        assert_eq!(clip.status, ClipStatus::NeedsEdit);
        assert_eq!(clip.duration_secs(), 29.0);
    }

    #[test]
    fn optional_clip_fields_default() {
        let raw = r#"{
            "id": "11111111-2222-3333-4444-555555555555",
            "mediaId": "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee",
            "title": "t",
            "startMs": 0,
            "endMs": 1000,
            "durationMs": 1000,
            "status": "SUGGESTED"
        }"#;
        let clip: ClipResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(clip.score, None);
        assert_eq!(clip.tags, None);
    }

    #[test]
    fn project_deserializes_with_optional_template() {
        let raw = r#"{
            "id": "11111111-2222-3333-4444-555555555555",
            "ownerId": "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee",
            "ownerExternalSubject": "demo-user-1",
            "title": "Q3 launch recap",
            "createdAt": "2026-08-01T10:00:00Z"
        }"#;
        let project: ProjectResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(project.title, "Q3 launch recap");
        assert_eq!(project.owner_external_subject, "demo-user-1");
        assert_eq!(project.template_id, None);
    }

    #[test]
    fn clip_patch_serializes_millis_camel_case() {
        let v = serde_json::to_value(ClipPatch { start_ms: 5000, end_ms: 40000 }).unwrap();
        assert_eq!(v, serde_json::json!({ "startMs": 5000, "endMs": 40000 }));
    }

    #[test]
    fn export_request_carries_the_style_inline() {
        let style = clipdeck_core::style::resolve_preset("YT_DEFAULT").style.clone();
        let req = ExportRequest {
            clip_id:        Uuid::nil(),
            subtitle_style: style,
            profile:        None,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["clipId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(v["subtitleStyle"]["fontFamily"], "Inter Medium");
        assert!(v["profile"].is_null());
    }

    #[test]
    fn job_terminal_states() {
        let raw = r#"{"id":"11111111-2222-3333-4444-555555555555","type":"RENDER","status":"COMPLETE","progress":1.0}"#;
        let job: JobResponse = serde_json::from_str(raw).unwrap();
        assert!(job.is_terminal());
        assert_eq!(job.job_type, "RENDER");
    }
}
