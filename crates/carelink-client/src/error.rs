//! Error taxonomy for backend requests.
//!
//! A 404 is its own variant so "no data" and "request failed" stay
//! distinguishable; callers that want the empty-list fallback opt in via
//! [`not_found_as_empty`] instead of inheriting it silently.

use thiserror::Error;

/// Failures surfaced by the API client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("server returned status {code}")]
    Status { code: u16 },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid appointment: {0}")]
    Validation(#[from] carelink_core::models::ValidationError),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Map [`ApiError::NotFound`] to an empty collection, leaving every other
/// outcome untouched. The deliberate replacement for the old behavior of
/// decaying any 404 into `[]`.
pub fn not_found_as_empty<T>(result: ApiResult<Vec<T>>) -> ApiResult<Vec<T>> {
    match result {
        Err(ApiError::NotFound) => Ok(Vec::new()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_becomes_empty() {
        let result: ApiResult<Vec<u32>> = Err(ApiError::NotFound);
        assert_eq!(not_found_as_empty(result).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_other_errors_pass_through() {
        let result: ApiResult<Vec<u32>> = Err(ApiError::Status { code: 500 });
        assert!(matches!(
            not_found_as_empty(result),
            Err(ApiError::Status { code: 500 })
        ));

        let ok: ApiResult<Vec<u32>> = Ok(vec![1, 2]);
        assert_eq!(not_found_as_empty(ok).unwrap(), vec![1, 2]);
    }
}
