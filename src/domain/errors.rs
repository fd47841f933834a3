use derive_more::Display;

/// Single failure taxonomy for talking to the market-data API.
///
/// The view treats every variant the same way (log, keep the list empty);
/// the split only makes the log line useful.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    #[display(fmt = "Network Error: {}", _0)]
    Transport(String),
    #[display(fmt = "HTTP error: {} - {}", code, text)]
    Status { code: u16, text: String },
    #[display(fmt = "Failed to parse JSON: {}", _0)]
    Decode(String),
    #[display(fmt = "Request cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn status(code: u16, text: impl Into<String>) -> Self {
        FetchError::Status { code, text: text.into() }
    }
}

impl std::error::Error for FetchError {}

pub type NetworkResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_text() {
        let err = FetchError::status(429, "Too Many Requests");
        assert_eq!(err.to_string(), "HTTP error: 429 - Too Many Requests");
    }
}
