use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::config::Config;
use crate::handlers;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routing::Router;

const READ_CHUNK: usize = 1024;

/// One client connection.
///
/// Exactly one request is served per connection; the write half is shut down
/// once the response has been sent.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    config: Arc<Config>,
    router: Router,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: Arc<Config>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            config,
            router: Router::new(),
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    Ok(Some(req)) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    Ok(None) => {
                        self.state = ConnectionState::Closed;
                    }
                    Err(e) => {
                        debug!("Rejecting malformed request: {:?}", e);
                        let writer = ResponseWriter::new(&Response::bad_request());
                        self.state = ConnectionState::Writing(writer);
                    }
                },

                ConnectionState::Processing(req) => {
                    let response =
                        handlers::dispatch(&self.router, req, self.config.files_root()).await;

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until a full request is buffered.
    ///
    /// The outer `Result` carries I/O errors. The inner one is `Ok(None)` when
    /// the peer closed before sending a complete request, and `Err` for a
    /// malformed request.
    pub async fn read_request(&mut self) -> anyhow::Result<Result<Option<Request>, ParseError>> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, _consumed)) => {
                    return Ok(Ok(Some(request)));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Ok(Err(e));
                }
            }

            // Read more data
            let mut temp = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                if !self.buffer.is_empty() {
                    debug!(
                        buffered = self.buffer.len(),
                        "Peer closed before sending a complete request"
                    );
                }
                return Ok(Ok(None));
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
