use crate::http::error::HttpError;
use crate::http::headers::Headers;

const HTTP_NAME: &str = "HTTP";
const HTTP_VERSION: &str = "1.1";

/// The first line of a request: `METHOD SP TARGET SP HTTP/1.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Upper-case method token, e.g. `GET`
    pub method: String,
    /// Request target as sent, e.g. `/index.html?x=1`
    pub target: String,
    /// Always `1.1`
    pub http_version: String,
}

impl RequestLine {
    /// Parses a request line without its trailing CRLF.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpfromtcp::http::request::RequestLine;
    /// let line = RequestLine::parse("GET /coffee HTTP/1.1").unwrap();
    /// assert_eq!(line.method, "GET");
    /// assert_eq!(line.target, "/coffee");
    /// assert_eq!(line.http_version, "1.1");
    /// ```
    pub fn parse(line: &str) -> Result<Self, HttpError> {
        let parts: Vec<&str> = line.split(' ').collect();
        let [method, target, version] = parts[..] else {
            return Err(HttpError::MalformedRequestLine(line.to_string()));
        };

        if method.is_empty() || !method.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(HttpError::InvalidMethod(method.to_string()));
        }

        match version.split_once('/') {
            Some((HTTP_NAME, HTTP_VERSION)) => {}
            _ => return Err(HttpError::UnsupportedVersion(version.to_string())),
        }

        Ok(Self {
            method: method.to_string(),
            target: target.to_string(),
            http_version: HTTP_VERSION.to_string(),
        })
    }
}

/// A fully framed request: request line plus headers.
///
/// Only produced once the blank line ending the header section was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub request_line: RequestLine,
    pub headers: Headers,
}

impl Request {
    pub fn method(&self) -> &str {
        &self.request_line.method
    }

    pub fn target(&self) -> &str {
        &self.request_line.target
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}
