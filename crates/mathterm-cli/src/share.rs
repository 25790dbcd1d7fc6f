//! Local HTTP endpoint exposing a read-only profile snapshot.
//!
//! `GET /api?key=<share key>` returns the profile as JSON; any other key
//! gets `401`.

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use mathterm_core::Profile;

const KEY_FILE: &str = "share.key";

#[derive(Clone)]
pub struct ShareState {
    profile: Arc<Profile>,
    key: Arc<str>,
}

impl ShareState {
    pub fn new(profile: Profile, key: &str) -> Self {
        Self {
            profile: Arc::new(profile),
            key: Arc::from(key),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct KeyQuery {
    key: Option<String>,
}

pub fn router(state: ShareState) -> Router {
    Router::new()
        .route("/api", get(share_profile))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn share_profile(State(state): State<ShareState>, Query(query): Query<KeyQuery>) -> Response {
    match query.key {
        Some(key) if key == *state.key => Json(state.profile.as_ref()).into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid API key" })),
        )
            .into_response(),
    }
}

/// Read the share key from `dir`, creating one on first use.
pub fn load_or_create_key(dir: &Path) -> Result<String> {
    let path = dir.join(KEY_FILE);
    if let Ok(existing) = std::fs::read_to_string(&path) {
        let existing = existing.trim();
        if !existing.is_empty() {
            return Ok(existing.to_string());
        }
    }

    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow!("cannot generate share key: {e}"))?;
    let key: String = bytes.iter().map(|b| format!("{b:02x}")).collect();

    std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    std::fs::write(&path, &key).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(key)
}

/// Serve `profile` until interrupted.
pub fn serve(profile: Profile, key: &str, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let app = router(ShareState::new(profile, key));

    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr.as_str())
            .await
            .with_context(|| format!("cannot bind {addr}"))?;
        info!("share server listening on http://{addr}");
        axum::serve(listener, app).await.context("share server failed")
    })
}
