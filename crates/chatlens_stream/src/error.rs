use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("unknown stream event: {0}")]
    UnknownEvent(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_event() {
        let err = StreamError::UnknownEvent("heartbeat".to_string());
        assert_eq!(err.to_string(), "unknown stream event: heartbeat");
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StreamError::from(json_err);
        assert!(matches!(err, StreamError::Json(_)));
    }
}
