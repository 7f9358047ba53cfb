use crate::http::headers::Headers;

/// HTTP status codes with a known reason phrase.
///
/// - `Ok` (200): Request successful
/// - `BadRequest` (400): Malformed request
/// - `InternalServerError` (500): Server error
/// - `Other`: any other code, written with an empty reason phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 500 Internal Server Error
    InternalServerError,
    Other(u16),
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpfromtcp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Other(404).as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::InternalServerError => 500,
            StatusCode::Other(code) => *code,
        }
    }

    /// Returns the reason phrase, empty for codes outside the known set.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpfromtcp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::Other(418).reason_phrase(), "");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::Other(_) => "",
        }
    }

    /// Serializes `HTTP/1.1 <code> <reason>\r\n`.
    pub fn status_line(&self) -> String {
        format!("HTTP/1.1 {} {}\r\n", self.as_u16(), self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        match code {
            200 => StatusCode::Ok,
            400 => StatusCode::BadRequest,
            500 => StatusCode::InternalServerError,
            other => StatusCode::Other(other),
        }
    }
}

/// Headers for a plain, non-chunked response whose body is `content_len`
/// bytes long.
///
/// Callers switching to chunked encoding remove `Content-Length` and set
/// `Transfer-Encoding` themselves.
pub fn default_headers(content_len: usize) -> Headers {
    let mut headers = Headers::new();
    headers.set("Content-Length", &content_len.to_string());
    headers.set("Connection", "close");
    headers.set("Content-Type", "text/html");
    headers
}

/// A complete buffered response, written in one go with
/// [`ResponseWriter::write_response`](crate::http::writer::ResponseWriter::write_response).
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a response with [`default_headers`] sized to `body`.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        Self {
            status,
            headers: default_headers(body.len()),
            body,
        }
    }

    /// Replaces a header value.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.replace(name, value);
        self
    }

    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::Ok, body)
    }

    /// 400 carrying `message` as a plain text body.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BadRequest, message.into()).header("Content-Type", "text/plain")
    }

    /// 500 carrying `message` as a plain text body.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::InternalServerError, message.into())
            .header("Content-Type", "text/plain")
    }
}
