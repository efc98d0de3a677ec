use crate::http::request::{Headers, Method, Request};

/// Largest request line plus header block accepted, separator included.
pub const MAX_HEAD_SIZE: usize = 8 * 1024;
/// Largest declared Content-Length accepted.
pub const MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    InvalidContentLength,
    HeadersTooLarge,
    BodyTooLarge,
    Incomplete,
}

/// Parses one request from the front of `buf`.
///
/// Returns the request and the number of bytes it occupied. `Incomplete`
/// means more bytes are needed: either the blank line ending the header block
/// has not arrived yet, or fewer than `Content-Length` body bytes have.
/// Without a Content-Length header the body is everything after the header
/// block.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let headers_end = match find_headers_end(buf) {
        Some(end) if end + 4 > MAX_HEAD_SIZE => return Err(ParseError::HeadersTooLarge),
        Some(end) => end,
        None if buf.len() >= MAX_HEAD_SIZE => return Err(ParseError::HeadersTooLarge),
        None => return Err(ParseError::Incomplete),
    };
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str =
        std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line: exactly three single-space separated tokens
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method_str, path, version] = parts[..] else {
        return Err(ParseError::InvalidRequest);
    };

    if !path.starts_with('/') || version.is_empty() {
        return Err(ParseError::InvalidRequest);
    }

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = Headers::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ParseError::InvalidHeader);
        }

        // Only the single space after the colon is separator
        headers.append(key, value.strip_prefix(' ').unwrap_or(value));
    }

    // Body
    let content_length = content_length(&headers)?.unwrap_or(body_bytes.len());

    if content_length > MAX_BODY_SIZE {
        return Err(ParseError::BodyTooLarge);
    }

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

/// `None` when the header is absent. Conflicting duplicates are rejected.
fn content_length(headers: &Headers) -> Result<Option<usize>, ParseError> {
    let mut length = None;

    for value in headers.get_all("Content-Length") {
        let parsed = value
            .trim()
            .parse::<usize>()
            .map_err(|_| ParseError::InvalidContentLength)?;

        match length {
            Some(prev) if prev != parsed => return Err(ParseError::InvalidContentLength),
            _ => length = Some(parsed),
        }
    }

    Ok(length)
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
