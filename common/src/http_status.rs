//! HTTP status code helpers used when classifying API failures.

/// HTTP status code carried by a failed API call.
///
/// Stored directly rather than parsed back out of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// Any status the API treats as a failure (400 and above).
    pub fn is_failure(&self) -> bool {
        self.0 >= 400
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
