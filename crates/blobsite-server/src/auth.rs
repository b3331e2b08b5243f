use axum::http::HeaderMap;

use blobsite_router::Identity;

/// Per-request identity source.
///
/// The server never authenticates callers itself; it consumes what the
/// authentication layer in front of it (an auth proxy) established and
/// recorded on the request.
pub trait IdentityProvider: Send + Sync {
    fn identify(&self, headers: &HeaderMap) -> Identity;
}

/// Reads the authenticated principal's name from a trusted request header.
///
/// A missing or empty header means the caller is unauthenticated. The
/// header must be one the proxy strips from client input, otherwise any
/// caller could forge an identity.
pub struct HeaderIdentity {
    header: String,
}

impl HeaderIdentity {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

impl IdentityProvider for HeaderIdentity {
    fn identify(&self, headers: &HeaderMap) -> Identity {
        match headers
            .get(self.header.as_str())
            .and_then(|value| value.to_str().ok())
            .filter(|name| !name.is_empty())
        {
            Some(name) => Identity::user(name),
            None => Identity::anonymous(),
        }
    }
}

/// Fixed identity regardless of the request. For tests and local runs.
pub struct StaticIdentity(pub Identity);

impl IdentityProvider for StaticIdentity {
    fn identify(&self, _headers: &HeaderMap) -> Identity {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn header_present_yields_authenticated_user() {
        let provider = HeaderIdentity::new("x-auth-user");
        let mut headers = HeaderMap::new();
        headers.insert("x-auth-user", HeaderValue::from_static("alice"));

        let identity = provider.identify(&headers);
        assert!(identity.authenticated);
        assert_eq!(identity.name.as_deref(), Some("alice"));
    }

    #[test]
    fn header_absent_is_anonymous() {
        let provider = HeaderIdentity::new("x-auth-user");
        let identity = provider.identify(&HeaderMap::new());
        assert!(!identity.authenticated);
        assert!(identity.name.is_none());
    }

    #[test]
    fn empty_header_is_anonymous() {
        let provider = HeaderIdentity::new("x-auth-user");
        let mut headers = HeaderMap::new();
        headers.insert("x-auth-user", HeaderValue::from_static(""));
        assert!(!provider.identify(&headers).authenticated);
    }

    #[test]
    fn static_identity_ignores_headers() {
        let provider = StaticIdentity(Identity::user("bob"));
        let identity = provider.identify(&HeaderMap::new());
        assert_eq!(identity.name.as_deref(), Some("bob"));
    }
}
