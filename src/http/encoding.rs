//! Content negotiation for response bodies.
//!
//! Only gzip is supported. A client opts in by listing `gzip` anywhere in its
//! `Accept-Encoding` header; anything else (or no header) gets the identity
//! encoding.

use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::http::response::ResponseBuilder;

pub const GZIP: &str = "gzip";

/// Returns true when the `Accept-Encoding` value mentions gzip.
pub fn accepts_gzip(accept_encoding: Option<&str>) -> bool {
    accept_encoding.is_some_and(|v| v.contains(GZIP))
}

/// Compresses `data` into a complete gzip stream.
pub fn gzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() + 32), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Attaches `body` to `builder`, gzip-compressed when the client accepts it.
///
/// Content-Length always describes the bytes actually sent, so for a
/// compressed body it is the compressed size.
pub fn negotiate(
    builder: ResponseBuilder,
    accept_encoding: Option<&str>,
    body: Vec<u8>,
) -> io::Result<ResponseBuilder> {
    if accepts_gzip(accept_encoding) {
        let compressed = gzip(&body)?;
        Ok(builder
            .header("Content-Encoding", GZIP)
            .header("Content-Length", compressed.len().to_string())
            .body(compressed))
    } else {
        Ok(builder
            .header("Content-Length", body.len().to_string())
            .body(body))
    }
}
