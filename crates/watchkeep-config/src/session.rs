use crate::credentials::CredentialStore;

/// The in-memory session token.
///
/// Initialized by `restore` from the credential store at process startup and
/// torn down by `logout`. Views never touch the token directly; they read it
/// through `token()` and the CLI threads the session into each command. No
/// expiry or well-formedness check happens here: a stale token surfaces as an
/// ordinary per-call API failure.
#[derive(Debug, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Rehydrate from the durable token, if one was persisted at login.
    pub fn restore(store: &CredentialStore) -> Self {
        Self {
            token: store.get_api_token().cloned(),
        }
    }

    /// Set the token after a successful login. Durable persistence is the
    /// caller's responsibility at the point of login, not the session's.
    pub fn login(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn logout(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
