//! Session gate — authenticated/unauthenticated state for the client.
//!
//! The server-issued session cookie on the HTTP agent is the real
//! authority; this flag only decides which view the client presents and
//! gates every other component. A process always starts logged-out.

use crate::api::SecretsApi;
use crate::errors::{Result, VaultLinkError};

/// Tracks whether the client currently holds a valid server session.
#[derive(Debug, Default)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Ask the server whether the session cookie is still valid.
    ///
    /// Any failure, network trouble included, counts as "not
    /// authenticated" so the client fails safe to the login view.
    pub fn check(&mut self, api: &dyn SecretsApi) -> bool {
        self.authenticated = api.check_auth().unwrap_or(false);
        self.authenticated
    }

    /// Authenticate with the master password.
    ///
    /// An empty password fails locally without a request. A rejected
    /// password surfaces the server's message and leaves the session
    /// state unchanged.
    pub fn login(&mut self, api: &dyn SecretsApi, password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(VaultLinkError::Validation("Password is required".into()));
        }

        api.login(password)?;
        self.authenticated = true;
        Ok(())
    }

    /// Log out. The server notification is best-effort; the local
    /// transition to unauthenticated happens regardless of the network
    /// outcome. The caller is responsible for clearing the collection.
    pub fn logout(&mut self, api: &dyn SecretsApi) {
        let _ = api.logout();
        self.authenticated = false;
    }

    /// Drop to unauthenticated without a request. Used when any
    /// authenticated-area call comes back 401.
    pub fn invalidate(&mut self) {
        self.authenticated = false;
    }
}
