//! Courier - a minimal HTTP/1.1 server over raw TCP streams
//!
//! Core library for request parsing, routing, handlers and response framing.

pub mod config;
pub mod handlers;
pub mod http;
pub mod routing;
pub mod server;
