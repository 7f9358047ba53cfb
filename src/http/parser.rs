use crate::http::error::HttpError;
use crate::http::headers::{CRLF, Headers, find_crlf};
use crate::http::request::{Request, RequestLine};

/// Where the parser is within the request framing.
///
/// States only move forward: request line, then headers, then done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    RequestLine,
    Headers,
    Done,
}

impl ParseState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseState::RequestLine => "parsing request line",
            ParseState::Headers => "parsing headers",
            ParseState::Done => "done",
        }
    }
}

/// Incremental request parser.
///
/// Bytes can arrive in any fragmentation: the parser consumes whole lines
/// only and reports how many bytes it used, leaving the rest for the caller
/// to present again together with more data.
#[derive(Debug)]
pub struct MessageParser {
    state: ParseState,
    request_line: Option<RequestLine>,
    headers: Headers,
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageParser {
    pub fn new() -> Self {
        Self {
            state: ParseState::RequestLine,
            request_line: None,
            headers: Headers::new(),
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == ParseState::Done
    }

    /// Consumes as many complete lines from `data` as possible.
    ///
    /// Stops when a step needs more bytes or the header section ends, and
    /// returns the total number of bytes consumed.
    pub fn feed(&mut self, data: &[u8]) -> Result<usize, HttpError> {
        if self.is_done() {
            return Err(HttpError::InvalidState);
        }

        let mut consumed = 0;
        while !self.is_done() {
            let n = self.step(&data[consumed..])?;
            if n == 0 {
                break;
            }
            consumed += n;
        }
        Ok(consumed)
    }

    /// Runs a single transition and returns the bytes it consumed.
    fn step(&mut self, data: &[u8]) -> Result<usize, HttpError> {
        match self.state {
            ParseState::RequestLine => {
                let Some(idx) = find_crlf(data) else {
                    return Ok(0);
                };
                let line = std::str::from_utf8(&data[..idx]).map_err(|_| {
                    HttpError::MalformedRequestLine(
                        String::from_utf8_lossy(&data[..idx]).into_owned(),
                    )
                })?;

                let request_line = RequestLine::parse(line)?;
                tracing::debug!(
                    method = %request_line.method,
                    target = %request_line.target,
                    "Parsed request line"
                );
                self.request_line = Some(request_line);
                self.state = ParseState::Headers;
                Ok(idx + CRLF.len())
            }

            ParseState::Headers => {
                let (n, done) = self.headers.parse(data)?;
                if done {
                    self.state = ParseState::Done;
                }
                Ok(n)
            }

            ParseState::Done => Err(HttpError::InvalidState),
        }
    }

    /// Hands out the parsed request once the header section is complete.
    pub fn into_request(self) -> Option<Request> {
        if !self.is_done() {
            return None;
        }

        Some(Request {
            request_line: self.request_line?,
            headers: self.headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let mut parser = MessageParser::new();
        let consumed = parser.feed(req).unwrap();

        assert_eq!(consumed, req.len());
        let parsed = parser.into_request().unwrap();
        assert_eq!(parsed.target(), "/");
        assert_eq!(parsed.header("Host").unwrap(), "example.com");
    }

    #[test]
    fn partial_line_consumes_nothing() {
        let mut parser = MessageParser::new();

        assert_eq!(parser.feed(b"GET / HTT").unwrap(), 0);
        assert_eq!(parser.state(), ParseState::RequestLine);
    }

    #[test]
    fn feed_after_done_is_invalid_state() {
        let mut parser = MessageParser::new();
        parser.feed(b"GET / HTTP/1.1\r\n\r\n").unwrap();

        assert!(matches!(parser.feed(b"\r\n"), Err(HttpError::InvalidState)));
    }
}
