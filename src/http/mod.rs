//! HTTP/1.1 protocol implementation.
//!
//! Each connection serves a single request and is then closed.
//!
//! # Architecture
//!
//! - **`connection`**: Drives one client through read → handle → write → close
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: Request representation and case-insensitive header lookup
//! - **`response`**: Response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`encoding`**: Accept-Encoding negotiation and gzip compression
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer bytes until a full request parses
//!        └──────┬──────┘
//!               │ Request received          Malformed request
//!               ▼                                  │
//!        ┌──────────────────┐                      │
//!        │   Processing     │ ← Route and handle   │
//!        └──────┬───────────┘                      │
//!               │ Response ready                   │ 400 Bad Request
//!               ▼                                  │
//!        ┌──────────────────┐                      │
//!        │    Writing       │ ◄────────────────────┘
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use courier::config::Config;
//! use courier::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Arc::new(Config::load());
//!     let listener = TcpListener::bind(&cfg.listen_addr).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let cfg = Arc::clone(&cfg);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, cfg);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod encoding;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
