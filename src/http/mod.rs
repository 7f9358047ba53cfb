//! HTTP/1.1 message layer.
//!
//! Requests are framed incrementally from a byte stream and responses are
//! written part by part to an output stream. One connection carries exactly
//! one request and one response.
//!
//! # Architecture
//!
//! - **`headers`**: Case-insensitive header map and single header line parsing
//! - **`request`**: Request line and parsed request representation
//! - **`parser`**: Incremental request parser state machine
//! - **`reader`**: Buffer management loop feeding a byte source to the parser
//! - **`response`**: Status codes, default headers and buffered responses
//! - **`writer`**: Response writer enforcing status line, headers, body order
//! - **`connection`**: Per-connection worker tying the above to a handler
//! - **`error`**: Protocol errors
//!
//! # Request Parser State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │   RequestLine    │ ← Wait for the first CRLF
//!        └──────┬───────────┘
//!               │ METHOD SP TARGET SP HTTP/1.1
//!               ▼
//!        ┌──────────────────┐
//!        │     Headers      │ ← One `Name: Value` line per step
//!        └──────┬───────────┘
//!               │ Blank line
//!               ▼
//!        ┌──────────────────┐
//!        │      Done        │
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use httpfromtcp::http::reader::request_from_reader;
//! use httpfromtcp::http::response::{default_headers, StatusCode};
//! use httpfromtcp::http::writer::ResponseWriter;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:42069").await?;
//!     let (mut socket, _addr) = listener.accept().await?;
//!
//!     let request = request_from_reader(&mut socket).await?;
//!     let body = format!("you asked for {}", request.target());
//!
//!     let mut writer = ResponseWriter::new(socket);
//!     writer.write_status_line(StatusCode::Ok).await?;
//!     writer.write_headers(&default_headers(body.len())).await?;
//!     writer.write_body(body.as_bytes()).await?;
//!     Ok(())
//! }
//! ```

pub mod connection;
pub mod error;
pub mod headers;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod writer;

pub use error::HttpError;
pub use headers::Headers;
pub use request::{Request, RequestLine};
pub use response::{Response, StatusCode};
pub use writer::ResponseWriter;
