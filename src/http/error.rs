use thiserror::Error;

/// Errors produced while framing a request or writing a response.
///
/// The `Display` text of a parse error is what the peer sees in the body of
/// the `400 Bad Request` response.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request line did not have exactly three space separated fields.
    #[error("poorly formatted request-line: {0}")]
    MalformedRequestLine(String),

    /// The method contained something other than upper-case letters.
    #[error("invalid method: {0}")]
    InvalidMethod(String),

    /// Only `HTTP/1.1` is accepted.
    #[error("unrecognized HTTP-version: {0}")]
    UnsupportedVersion(String),

    /// A header line without exactly one `": "` separator.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("invalid header name: {0:?}")]
    InvalidHeaderName(String),

    #[error("header {0} has an empty value")]
    EmptyHeaderValue(String),

    /// The peer closed the stream before the blank line ending the headers.
    #[error("incomplete request, stream ended while {state}")]
    IncompleteRequest { state: &'static str },

    /// The parser was fed after it already finished.
    #[error("trying to parse data in a done state")]
    InvalidState,

    /// A response writer operation was called out of order.
    #[error("cannot {operation} in state {state}")]
    SequenceViolation {
        operation: &'static str,
        state: &'static str,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
