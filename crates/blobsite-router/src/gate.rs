/// Identity of the caller as reported by the authentication subsystem.
///
/// The gate only reads this; authentication itself happens upstream
/// (an auth proxy, in deployment).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub authenticated: bool,
    pub name: Option<String>,
}

impl Identity {
    /// An unauthenticated caller.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            name: None,
        }
    }

    /// An authenticated caller with the given name.
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            name: Some(name.into()),
        }
    }
}

/// Authorization check: exactly one identity may use the site.
///
/// True iff the caller is authenticated and their name equals
/// `authorized_name` case-insensitively (ASCII). Callers must short-circuit
/// to an unauthorized response on `false`; in particular, no container
/// access may happen for rejected callers.
pub fn authorize(identity: &Identity, authorized_name: &str) -> bool {
    identity.authenticated
        && identity
            .name
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(authorized_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_is_rejected() {
        assert!(!authorize(&Identity::anonymous(), "alice"));
        let mut id = Identity::user("alice");
        id.authenticated = false;
        assert!(!authorize(&id, "alice"));
    }

    #[test]
    fn name_comparison_is_case_insensitive() {
        assert!(authorize(&Identity::user("Alice"), "alice"));
        assert!(authorize(&Identity::user("alice"), "ALICE"));
    }

    #[test]
    fn different_name_is_rejected() {
        assert!(!authorize(&Identity::user("bob"), "alice"));
    }

    #[test]
    fn authenticated_without_name_is_rejected() {
        let id = Identity {
            authenticated: true,
            name: None,
        };
        assert!(!authorize(&id, "alice"));
    }

    #[test]
    fn empty_authorized_name_matches_nobody_useful() {
        // An unset authorized user only matches the (impossible) empty name.
        assert!(!authorize(&Identity::user("alice"), ""));
    }
}
