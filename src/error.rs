use thiserror::Error;

/// Coarse classification of a failed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TransportFailure,
    MalformedResponse,
}

/// Anything that can go wrong between sending the POST and reading the reply.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server returned status code: {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl DispatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::Transport { .. } | DispatchError::Status(_) => {
                ErrorKind::TransportFailure
            }
            DispatchError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }
}

/// Startup errors surfaced from `main`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("backend unavailable: {0}")]
    Backend(#[from] DispatchError),
    #[error("gui error: {0}")]
    Gui(#[from] eframe::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_transport_failures() {
        let err = DispatchError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn json_errors_are_malformed_responses() {
        let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = DispatchError::from(parse);
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert!(format!("{err}").starts_with("malformed response body"));
    }
}
