//! Error taxonomy for API calls.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend has no records for the requested user.
    #[error("no data (404)")]
    NotFound,

    /// Any other non-success status.
    #[error("unexpected status {code}")]
    Status { code: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    /// The body was not the JSON shape the endpoint promises.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    /// Map an HTTP status code onto the taxonomy. Success codes yield `None`.
    pub fn from_status(code: u16) -> Option<Self> {
        match code {
            200..=299 => None,
            404 => Some(ApiError::NotFound),
            code => Some(ApiError::Status { code }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::from_status(200), None);
        assert_eq!(ApiError::from_status(204), None);
        assert_eq!(ApiError::from_status(404), Some(ApiError::NotFound));
        assert_eq!(
            ApiError::from_status(500),
            Some(ApiError::Status { code: 500 })
        );
    }

    #[test]
    fn only_404_counts_as_no_data() {
        assert!(ApiError::NotFound.is_not_found());
        assert!(!ApiError::Status { code: 410 }.is_not_found());
        assert!(!ApiError::Transport("reset".into()).is_not_found());
    }
}
