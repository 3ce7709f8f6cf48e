use thiserror::Error;

/// The one failure the client knows about. `text` is whatever the server
/// (or the browser, for transport problems) said.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{text}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub text: String,
}

impl ApiError {
    pub fn status(status: u16, text: impl Into<String>) -> Self {
        Self { status: Some(status), text: text.into() }
    }

    pub fn other(text: impl Into<String>) -> Self {
        Self { status: None, text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_raw_server_text() {
        let err = ApiError::status(404, "Note not found");
        assert_eq!(err.to_string(), "Note not found");
        assert_eq!(err.status, Some(404));
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = ApiError::other("TypeError: Failed to fetch");
        assert_eq!(err.status, None);
        assert_eq!(format!("{err}"), "TypeError: Failed to fetch");
    }
}
