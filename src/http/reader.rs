use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::error::HttpError;
use crate::http::parser::MessageParser;
use crate::http::request::Request;

/// Starting capacity of the read buffer. Doubled whenever it fills up.
pub const INITIAL_BUFFER_SIZE: usize = 8;

/// Drives a [`MessageParser`] from a byte source.
///
/// The buffer is an owned capacity plus a cursor marking how much of it holds
/// unparsed bytes. Parsed bytes are shifted out after each read so only the
/// unconsumed tail is carried into the next iteration.
#[derive(Debug)]
pub struct StreamReader {
    buffer: Vec<u8>,
    cursor: usize,
    parser: MessageParser,
}

impl Default for StreamReader {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamReader {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_BUFFER_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity.max(1)],
            cursor: 0,
            parser: MessageParser::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of read but unconsumed bytes.
    pub fn buffered(&self) -> usize {
        self.cursor
    }

    /// Reads until the header section is complete.
    ///
    /// Bytes following the blank line stay in the buffer and are never
    /// interpreted. The parser is reset afterwards.
    pub async fn read_request<R>(&mut self, source: &mut R) -> Result<Request, HttpError>
    where
        R: AsyncRead + Unpin,
    {
        while !self.parser.is_done() {
            if self.cursor == self.buffer.len() {
                self.grow();
            }

            let n = source.read(&mut self.buffer[self.cursor..]).await?;
            if n == 0 {
                return Err(HttpError::IncompleteRequest {
                    state: self.parser.state().as_str(),
                });
            }
            self.cursor += n;

            let consumed = self.parser.feed(&self.buffer[..self.cursor])?;
            self.buffer.copy_within(consumed..self.cursor, 0);
            self.cursor -= consumed;
        }

        let parser = std::mem::take(&mut self.parser);
        parser.into_request().ok_or(HttpError::IncompleteRequest {
            state: "parsing request line",
        })
    }

    fn grow(&mut self) {
        let new_capacity = self.buffer.len() * 2;
        tracing::trace!(
            from = self.buffer.len(),
            to = new_capacity,
            "Growing read buffer"
        );
        self.buffer.resize(new_capacity, 0);
    }
}

/// Reads and frames one request from `source`.
pub async fn request_from_reader<R>(source: &mut R) -> Result<Request, HttpError>
where
    R: AsyncRead + Unpin,
{
    StreamReader::new().read_request(source).await
}
