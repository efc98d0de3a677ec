//! `/files/{name}` handlers.
//!
//! GET reads `<base>/<name>` and POST writes the request body there. Failures
//! are reported as a bare status (404 for reads, 500 for writes); the cause is
//! only logged.

use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

pub async fn handle(req: &Request, files_root: Option<&Path>, name: &str) -> Response {
    match req.method {
        Method::GET => read(files_root, name).await,
        Method::POST => write(files_root, name, &req.body).await,
        _ => Response::not_found(),
    }
}

pub async fn read(files_root: Option<&Path>, name: &str) -> Response {
    let Some(path) = resolve(files_root, name) else {
        return Response::not_found();
    };

    match tokio::fs::read(&path).await {
        Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .header("Content-Length", contents.len().to_string())
            .body(contents)
            .build(),
        Err(e) => {
            warn!(path = %path.display(), "Failed to read file: {}", e);
            Response::not_found()
        }
    }
}

pub async fn write(files_root: Option<&Path>, name: &str, body: &[u8]) -> Response {
    let Some(path) = resolve(files_root, name) else {
        return Response::internal_error();
    };

    match tokio::fs::write(&path, body).await {
        Ok(()) => Response::empty(StatusCode::Created),
        Err(e) => {
            warn!(path = %path.display(), "Failed to write file: {}", e);
            Response::internal_error()
        }
    }
}

/// Joins `name` onto the base directory.
///
/// Returns `None` without a base directory, or when `name` is absolute or
/// contains a `..` segment.
pub fn resolve(files_root: Option<&Path>, name: &str) -> Option<PathBuf> {
    let Some(root) = files_root else {
        warn!("No base directory configured for /files/");
        return None;
    };

    let relative = Path::new(name);
    let safe = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if !safe {
        warn!(name, "Rejected file name outside the base directory");
        return None;
    }

    Some(root.join(relative))
}
