//! Request handlers.
//!
//! Every handler turns a parsed request into a complete [`Response`]; none of
//! them fail. Only the file handlers touch the filesystem, and they only see
//! the base directory they are given.

pub mod files;

use std::path::Path;

use tracing::{debug, warn};

use crate::http::encoding;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routing::{Route, Router};

/// Routes `req` and runs the matching handler.
pub async fn dispatch(router: &Router, req: &Request, files_root: Option<&Path>) -> Response {
    let route = router.resolve(&req.path);

    let response = match route {
        Route::Root => root(),
        Route::Echo(text) => echo(req, text),
        Route::UserAgent => user_agent(req),
        Route::File(name) => files::handle(req, files_root, name).await,
        Route::NotFound => Response::not_found(),
    };

    debug!(
        method = req.method.as_str(),
        path = %req.path,
        status = response.status.as_u16(),
        "Handled request"
    );

    response
}

pub fn root() -> Response {
    Response::text(Vec::new())
}

/// Echoes `text` back, gzip-compressed when the client accepts it.
pub fn echo(req: &Request, text: &str) -> Response {
    let builder = ResponseBuilder::new(StatusCode::Ok).header("Content-Type", "text/plain");

    match encoding::negotiate(builder, req.header("Accept-Encoding"), text.as_bytes().to_vec()) {
        Ok(builder) => builder.build(),
        Err(e) => {
            warn!("Failed to compress echo body: {}", e);
            Response::internal_error()
        }
    }
}

/// Replies with the request's User-Agent, or an empty body without one.
pub fn user_agent(req: &Request) -> Response {
    let agent = req.header("User-Agent").unwrap_or_default();
    Response::text(agent.as_bytes())
}
