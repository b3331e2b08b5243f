use blobsite_store::{FetchedObject, ObjectKey};

/// The outcome of routing one request path.
///
/// Produced exactly once per request and consumed by the HTTP layer;
/// carries everything the response needs, so no container state outlives it.
#[derive(Debug)]
pub enum RouteDecision {
    /// Permanent redirect to the given container path (the HTTP layer
    /// prepends the base URI).
    Redirect(String),

    /// Serve the fetched object.
    Serve {
        key: ObjectKey,
        object: FetchedObject,
    },

    /// No object answers this path.
    NotFound,

    /// A container failure other than not-found. The code and message are
    /// for logs only and must never reach the client.
    ServerError { code: String, message: String },
}

impl RouteDecision {
    /// HTTP status class this decision maps to, for logging.
    pub fn status(&self) -> u16 {
        match self {
            Self::Redirect(_) => 301,
            Self::Serve { .. } => 200,
            Self::NotFound => 404,
            Self::ServerError { .. } => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(RouteDecision::Redirect("/a/".into()).status(), 301);
        assert_eq!(RouteDecision::NotFound.status(), 404);
        assert_eq!(
            RouteDecision::ServerError {
                code: "X".into(),
                message: "y".into()
            }
            .status(),
            500
        );
    }
}
