//! Static front-end serving with SPA fallback.
//!
//! Any GET that is not an API route lands here. Existing files under the
//! static root are served as-is; everything else gets `index.html` so the
//! client-side router can take over.

use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use axum::{
    body::Body,
    extract::{Path as UrlPath, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::state::AppState;

pub const INDEX_FILE: &str = "index.html";

/// Written when the static root has no index so the server has something to show.
pub const PLACEHOLDER_INDEX: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/x-icon" href="/favicon.ico" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>JobHunter Pro - AI-Powered Job Search</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>"#;

#[derive(Debug, Error, PartialEq)]
pub enum AssetError {
    #[error("Static folder not configured")]
    RootMissing,

    #[error("Not found")]
    OutsideRoot,

    #[error("index.html not found")]
    IndexMissing,
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}

/// GET / and GET /*path
pub async fn serve_frontend(
    State(state): State<AppState>,
    path: Option<UrlPath<String>>,
) -> Response {
    let requested = path.map(|UrlPath(p)| p).unwrap_or_default();

    let file_path = match resolve_asset(state.static_root(), &requested).await {
        Ok(p) => p,
        Err(e) => {
            match e {
                AssetError::RootMissing => warn!(
                    dir = %state.static_root().display(),
                    "Static directory does not exist"
                ),
                AssetError::OutsideRoot => warn!(
                    requested_path = %requested,
                    "Path traversal attempt detected"
                ),
                AssetError::IndexMissing => debug!(requested_path = %requested, "No index to fall back to"),
            }
            return e.into_response();
        }
    };

    match fs::read(&file_path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(&file_path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                Body::from(content),
            )
                .into_response()
        }
        Err(e) => AppError::Internal(
            anyhow::Error::new(e).context(format!("Failed to read {}", file_path.display())),
        )
        .into_response(),
    }
}

/// Maps a request path to the file that should answer it.
///
/// Returns the requested file when it exists under `root`, else the root
/// `index.html`. An empty path goes straight to the index.
pub async fn resolve_asset(root: &Path, requested: &str) -> Result<PathBuf, AssetError> {
    if !is_dir(root).await {
        return Err(AssetError::RootMissing);
    }

    let relative = relative_path(requested).ok_or(AssetError::OutsideRoot)?;
    if !relative.as_os_str().is_empty() {
        let candidate = root.join(&relative);
        if is_file(&candidate).await {
            return Ok(candidate);
        }
    }

    let index = root.join(INDEX_FILE);
    if is_file(&index).await {
        Ok(index)
    } else {
        Err(AssetError::IndexMissing)
    }
}

/// Creates the static root and a placeholder index if either is missing.
/// Returns `true` when the placeholder was written.
pub async fn ensure_index(root: &Path) -> anyhow::Result<bool> {
    fs::create_dir_all(root)
        .await
        .with_context(|| format!("Failed to create static directory {}", root.display()))?;

    let index = root.join(INDEX_FILE);
    if is_file(&index).await {
        return Ok(false);
    }

    fs::write(&index, PLACEHOLDER_INDEX)
        .await
        .with_context(|| format!("Failed to write {}", index.display()))?;
    info!(path = %index.display(), "Wrote placeholder index");
    Ok(true)
}

/// Normalizes a URL path into a path relative to the static root.
/// `None` when any component would step outside it.
fn relative_path(requested: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(requested.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(relative)
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false)
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
}
