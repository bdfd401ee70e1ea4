use reqwest::StatusCode;
use thiserror::Error;

/// All different error types this crate uses.
///
/// None of these ever reach the caller of the enrichment functions, they are
/// mapped onto the documented sentinel values at the public boundary.
#[derive(Error, Debug)]
pub enum EnrichError {
    /// The input was not of the expected shape, e.g. a missing text field.
    #[error("Expected {expected} input")]
    InputTypeMismatch {
        /// Description of the expected input.
        expected: &'static str,
    },
    /// Received a response, but not the expected status.
    #[error("Expected a success response but got: {status}")]
    NoHttpSuccess {
        /// The status of the response.
        status: StatusCode,
    },
    /// Failed to get a response.
    #[error("Request failed: {error}")]
    HttpRequestFailure {
        /// The reqwest error.
        #[from]
        error: reqwest::Error,
    },
    /// Failed to build the http client.
    #[error("Failed to build http client: {error}")]
    ClientBuild {
        /// The reqwest error.
        error: reqwest::Error,
    },
    /// Failed to read the input in the expected format.
    #[error("Failed to parse {input:?} as {expected}")]
    ParseFailure {
        /// The content that resulted in the error.
        input: String,
        /// The format that was expected.
        expected: &'static str,
    },
    /// A lookup against a reference table found nothing.
    #[error("No {table} entry for {key:?}")]
    LookupMiss {
        /// The table that was queried.
        table: &'static str,
        /// The key that was looked up.
        key: String,
    },
}

impl EnrichError {
    pub(crate) fn parse_failure<T: ToString>(input: T, expected: &'static str) -> Self {
        EnrichError::ParseFailure {
            input: input.to_string(),
            expected,
        }
    }

    pub(crate) fn lookup_miss<T: ToString>(table: &'static str, key: T) -> Self {
        EnrichError::LookupMiss {
            table,
            key: key.to_string(),
        }
    }
}
