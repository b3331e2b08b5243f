use crate::key::ObjectKey;

/// Errors from container operations.
///
/// "Not found" is deliberately a first-class variant so callers can branch
/// on it without inspecting error codes or messages.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// The requested blob does not exist in the container.
    #[error("object not found: {0}")]
    NotFound(ObjectKey),

    /// Any other failure reported by the storage backend.
    #[error("backend error [{code}]: {message}")]
    Backend { code: String, message: String },

    /// The container URL could not be parsed or the scheme is unsupported.
    #[error("invalid container URL: {0}")]
    InvalidUrl(String),
}

impl ContainerError {
    /// Returns `true` for the not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Short machine-readable code for logging.
    pub fn code(&self) -> &str {
        match self {
            Self::NotFound(_) => "NotFound",
            Self::Backend { code, .. } => code,
            Self::InvalidUrl(_) => "InvalidUrl",
        }
    }
}

/// Result alias for container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_matchable() {
        let err = ContainerError::NotFound(ObjectKey::from_path("/missing"));
        assert!(err.is_not_found());
        assert_eq!(err.code(), "NotFound");
    }

    #[test]
    fn backend_carries_code_and_message() {
        let err = ContainerError::Backend {
            code: "ServerBusy".into(),
            message: "try again".into(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.code(), "ServerBusy");
        assert_eq!(err.to_string(), "backend error [ServerBusy]: try again");
    }
}
