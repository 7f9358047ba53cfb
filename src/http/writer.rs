use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::error::HttpError;
use crate::http::headers::{CRLF, Headers};
use crate::http::response::{Response, StatusCode};

/// Which part of the response the writer expects next.
///
/// ```text
/// StatusLine ─▶ Headers ─▶ Body
///                  │
///                  └─────▶ ChunkedBody ─▶ Trailers ─▶ Complete
/// ```
///
/// Any failed write to the sink moves the writer to `Failed`, which rejects
/// every later call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    StatusLine,
    Headers,
    Body,
    ChunkedBody,
    Trailers,
    Complete,
    Failed,
}

impl WriterState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriterState::StatusLine => "status-line",
            WriterState::Headers => "headers",
            WriterState::Body => "body",
            WriterState::ChunkedBody => "chunked-body",
            WriterState::Trailers => "trailers",
            WriterState::Complete => "complete",
            WriterState::Failed => "failed",
        }
    }
}

/// Writes one response to `sink`, enforcing the order of its parts.
///
/// Every operation fails with [`HttpError::SequenceViolation`] when called
/// in the wrong state. The writer never inspects header values: declaring a
/// matching `Content-Length` or `Transfer-Encoding: chunked` is up to the
/// caller.
#[derive(Debug)]
pub struct ResponseWriter<W> {
    sink: W,
    state: WriterState,
    bytes_written: usize,
    plain_body: bool,
}

impl<W> ResponseWriter<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            state: WriterState::StatusLine,
            bytes_written: 0,
            plain_body: false,
        }
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Body payload bytes written so far, excluding chunk framing.
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn check_state(
        &self,
        operation: &'static str,
        allowed: &[WriterState],
    ) -> Result<(), HttpError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(HttpError::SequenceViolation {
                operation,
                state: self.state.as_str(),
            })
        }
    }

    // An i/o error aborts the rest of the response; nothing is retried.
    async fn send(&mut self, bytes: &[u8]) -> Result<(), HttpError> {
        if let Err(e) = self.sink.write_all(bytes).await {
            self.state = WriterState::Failed;
            return Err(e.into());
        }
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), HttpError> {
        if let Err(e) = self.sink.flush().await {
            self.state = WriterState::Failed;
            return Err(e.into());
        }
        Ok(())
    }

    pub async fn write_status_line(
        &mut self,
        status: impl Into<StatusCode>,
    ) -> Result<(), HttpError> {
        self.check_state("write status line", &[WriterState::StatusLine])?;

        let status = status.into();
        self.send(status.status_line().as_bytes()).await?;
        self.state = WriterState::Headers;
        Ok(())
    }

    pub async fn write_headers(&mut self, headers: &Headers) -> Result<(), HttpError> {
        self.check_state("write headers", &[WriterState::Headers])?;

        self.send(&serialize_fields(headers)).await?;
        self.state = WriterState::Body;
        Ok(())
    }

    /// Writes raw payload bytes. May be called repeatedly.
    pub async fn write_body(&mut self, body: &[u8]) -> Result<usize, HttpError> {
        self.check_state("write body", &[WriterState::Body])?;

        self.plain_body = true;
        self.send(body).await?;
        self.bytes_written += body.len();
        Ok(body.len())
    }

    /// Writes `data` as one chunk: `<hex length>\r\n<data>\r\n`.
    ///
    /// An empty slice writes nothing; the terminating zero-length chunk is
    /// written by [`write_chunked_body_done`](Self::write_chunked_body_done).
    pub async fn write_chunked_body(&mut self, data: &[u8]) -> Result<usize, HttpError> {
        self.check_chunked_state("write chunked body")?;
        self.state = WriterState::ChunkedBody;

        if data.is_empty() {
            return Ok(0);
        }

        let size = format!("{:x}", data.len());
        let mut frame = BytesMut::with_capacity(size.len() + data.len() + 2 * CRLF.len());
        frame.put_slice(size.as_bytes());
        frame.put_slice(CRLF);
        frame.put_slice(data);
        frame.put_slice(CRLF);

        self.send(&frame).await?;
        self.bytes_written += data.len();
        Ok(data.len())
    }

    /// Writes the final `0\r\n` chunk. Trailers must follow.
    pub async fn write_chunked_body_done(&mut self) -> Result<(), HttpError> {
        self.check_chunked_state("write chunked body done")?;

        self.send(b"0\r\n").await?;
        self.state = WriterState::Trailers;
        Ok(())
    }

    /// Writes trailer fields and the blank line ending the message.
    pub async fn write_trailers(&mut self, trailers: &Headers) -> Result<(), HttpError> {
        self.check_state("write trailers", &[WriterState::Trailers])?;

        self.send(&serialize_fields(trailers)).await?;
        self.flush().await?;
        self.state = WriterState::Complete;
        Ok(())
    }

    /// Writes status line, headers and body of a buffered response.
    pub async fn write_response(&mut self, response: &Response) -> Result<(), HttpError> {
        self.write_status_line(response.status).await?;
        self.write_headers(&response.headers).await?;
        self.write_body(&response.body).await?;
        self.flush().await?;
        Ok(())
    }

    // Chunks may start right after the headers, as long as write_body was
    // never called, even with an empty slice.
    fn check_chunked_state(&self, operation: &'static str) -> Result<(), HttpError> {
        match self.state {
            WriterState::ChunkedBody => Ok(()),
            WriterState::Body if !self.plain_body => Ok(()),
            state => Err(HttpError::SequenceViolation {
                operation,
                state: state.as_str(),
            }),
        }
    }
}

fn serialize_fields(fields: &Headers) -> BytesMut {
    let mut buf = BytesMut::new();
    for (name, value) in fields.iter() {
        buf.put_slice(name.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(value.as_bytes());
        buf.put_slice(CRLF);
    }
    buf.put_slice(CRLF);
    buf
}
