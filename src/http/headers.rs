use std::collections::HashMap;
use std::collections::hash_map;

use crate::http::error::HttpError;

pub(crate) const CRLF: &[u8] = b"\r\n";

/// Case-insensitive header storage.
///
/// Names are always stored lower-cased. Repeated headers fold into a single
/// comma separated value, so `A: 1` followed by `A: 2` reads back as `1, 2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    inner: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses at most one header line from the front of `data`.
    ///
    /// Returns the number of bytes consumed and whether the blank line ending
    /// the header section was seen. `(0, false)` means no full line is
    /// buffered yet and the caller has to supply more bytes.
    pub fn parse(&mut self, data: &[u8]) -> Result<(usize, bool), HttpError> {
        let Some(idx) = find_crlf(data) else {
            return Ok((0, false));
        };

        if idx == 0 {
            return Ok((CRLF.len(), true));
        }

        let line = std::str::from_utf8(&data[..idx]).map_err(|_| {
            HttpError::MalformedHeader(String::from_utf8_lossy(&data[..idx]).into_owned())
        })?;

        let mut parts = line.split(": ");
        let (name, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) => (name, value),
            _ => return Err(HttpError::MalformedHeader(line.to_string())),
        };

        if name.ends_with(' ') || !is_token(name) {
            return Err(HttpError::InvalidHeaderName(name.to_string()));
        }

        let value = value.trim();
        if value.is_empty() {
            return Err(HttpError::EmptyHeaderValue(name.to_string()));
        }

        self.set(name, value);
        Ok((idx + CRLF.len(), false))
    }

    /// Adds a header, folding onto any existing value with `", "`.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.inner.entry(name.to_ascii_lowercase()) {
            hash_map::Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.push_str(", ");
                existing.push_str(value);
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(value.to_string());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Sets a header, discarding any previous value.
    pub fn replace(&mut self, name: &str, value: &str) {
        self.inner.insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.inner.remove(&name.to_ascii_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates `(name, value)` pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Headers {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

pub(crate) fn find_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).position(|w| w == CRLF)
}

// RFC 7230 tchar
fn is_token(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_characters() {
        assert!(is_token("X-Forwarded-For"));
        assert!(is_token("a!#$%&'*+-.^_`|~9"));
        assert!(!is_token(""));
        assert!(!is_token("H©st"));
        assert!(!is_token("Bad(Name)"));
    }
}
