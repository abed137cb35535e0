//! Host auth bridge.
//!
//! The console can run embedded in a host application that owns the login
//! flow; the host pushes credentials as JSON messages. Only messages from
//! an explicitly allowed origin are honored; everything else is dropped
//! and logged before any credential is read.

use serde::Deserialize;

use atrium_client::types::{Company, User};
use atrium_rbac::Role;
use atrium_store::{Session, Store};

pub const AUTH_MESSAGE_TYPE: &str = "company-auth";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthMessage {
    #[serde(rename = "type")]
    kind: String,
    user: Option<User>,
    access_token: Option<String>,
    selected_company: Option<Company>,
    role: Option<Role>,
}

/// Outcome of handling one host message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeOutcome {
    /// Credentials were injected into the auth slice.
    Accepted,
    /// The message came from an origin outside the allow-list.
    RejectedOrigin,
    /// Wrong type, unparseable payload, or missing user/token.
    Ignored,
}

/// Consumes host messages and injects sessions into the store.
#[derive(Debug, Clone)]
pub struct HostAuthBridge {
    allowed_origins: Vec<String>,
}

impl HostAuthBridge {
    /// An empty allow-list accepts nothing.
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }

    /// Handle one message from `origin` carrying a JSON `payload`.
    pub fn handle_message(&self, origin: &str, payload: &str, store: &mut Store) -> BridgeOutcome {
        if !self.origin_allowed(origin) {
            tracing::warn!(origin, "rejected auth message from untrusted origin");
            return BridgeOutcome::RejectedOrigin;
        }

        let message: AuthMessage = match serde_json::from_str(payload) {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!(origin, error = %err, "ignoring unparseable host message");
                return BridgeOutcome::Ignored;
            }
        };

        if message.kind != AUTH_MESSAGE_TYPE {
            return BridgeOutcome::Ignored;
        }

        let (Some(user), Some(access_token)) = (message.user, message.access_token) else {
            tracing::debug!(origin, "ignoring auth message without user or token");
            return BridgeOutcome::Ignored;
        };

        tracing::info!(origin, user = %user.id, "host session accepted");
        store.auth.set_auth(Session {
            user,
            access_token,
            selected_company: message.selected_company,
            role: message.role,
        });
        BridgeOutcome::Accepted
    }
}
