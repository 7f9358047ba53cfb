//! httpfromtcp - HTTP/1.1 straight from a TCP stream
//!
//! Incremental request framing, a state-checked response writer with chunked
//! encoding and trailers, and a one-task-per-connection server.

pub mod config;
pub mod http;
pub mod server;
