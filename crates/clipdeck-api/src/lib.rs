// crates/clipdeck-api/src/lib.rs
//
// The backend boundary: wire types, a blocking REST client, asset URL
// helpers, and the background worker that keeps HTTP off the UI thread.

pub mod client;
pub mod files;
pub mod types;
pub mod worker;

pub use client::{ApiClient, ApiConfig};
pub use worker::{ApiRequest, ApiResult, ApiWorker};
