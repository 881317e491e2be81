/// Status of a successful invocation.
pub const OK: i32 = 200;

/// Statuses at or above this value are errors.
pub const ERROR_THRESHOLD: i32 = 400;

/// Status of a failed invocation.
pub const ERROR: i32 = 500;

/// What a chaincode returns to its host for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: i32,
    pub message: String,
    pub payload: Vec<u8>,
}

impl Response {
    /// Successful response, optionally carrying a payload.
    pub fn success(payload: Option<Vec<u8>>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload: payload.unwrap_or_default(),
        }
    }

    /// Error response with a human-readable message and no payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status < ERROR_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_error_shapes() {
        let ok = Response::success(Some(b"{}".to_vec()));
        assert_eq!(ok.status, OK);
        assert!(ok.is_ok());
        assert_eq!(ok.payload, b"{}");

        assert!(Response::success(None).payload.is_empty());

        let err = Response::error("contract C1 not found");
        assert_eq!(err.status, ERROR);
        assert!(!err.is_ok());
        assert_eq!(err.message, "contract C1 not found");
        assert!(err.payload.is_empty());
    }

    #[test]
    fn threshold_decides_success() {
        let mut resp = Response::success(None);
        resp.status = 399;
        assert!(resp.is_ok());
        resp.status = ERROR_THRESHOLD;
        assert!(!resp.is_ok());
    }
}
