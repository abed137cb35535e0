//! Session state: the signed-in user, their token and resolved role.

use atrium_client::types::{Company, User};
use atrium_rbac::Role;

/// An authenticated session injected by the host (or by `authenticate`).
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub selected_company: Option<Company>,
    /// The user's role in the selected company. Every permission check in
    /// the console reads this; there is no fallback role.
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Default)]
pub struct AuthSlice {
    pub session: Option<Session>,
    pub error: Option<String>,
}

impl AuthSlice {
    pub fn set_auth(&mut self, session: Session) {
        self.session = Some(session);
        self.error = None;
    }

    pub fn clear_auth(&mut self) {
        self.session = None;
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().and_then(|s| s.role)
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::UserId;

    fn session() -> Session {
        Session {
            user: User {
                id: UserId::from("u-1"),
                groups: Vec::new(),
                email: Some("u@example.com".to_string()),
                name: None,
            },
            access_token: "tok".to_string(),
            selected_company: None,
            role: Some(Role::Admin),
        }
    }

    #[test]
    fn set_auth_replaces_session_and_clears_error() {
        let mut slice = AuthSlice::default();
        slice.set_error("stale");
        slice.set_auth(session());

        assert_eq!(slice.token(), Some("tok"));
        assert_eq!(slice.role(), Some(Role::Admin));
        assert!(slice.error.is_none());
    }

    #[test]
    fn clear_auth_drops_everything() {
        let mut slice = AuthSlice::default();
        slice.set_auth(session());
        slice.clear_auth();

        assert!(slice.session.is_none());
        assert!(slice.token().is_none());
        assert!(slice.role().is_none());
    }
}
