//! Blocking HTTP/JSON client for the vault server.
//!
//! The `ureq` agent keeps a cookie jar, so the server-issued session
//! cookie rides along on every request automatically. There is no other
//! auth header. Non-2xx responses carry a structured `{error}` body
//! which is surfaced with a generic fallback when it can't be parsed.

use std::time::Duration;

use serde::Deserialize;

use crate::config::Settings;
use crate::errors::{Result, VaultLinkError};

use super::types::{CreateSecret, SecretRecord, SecretSummary, UpdateSecret};
use super::SecretsApi;

/// Production implementation of [`SecretsApi`].
pub struct HttpApi {
    agent: ureq::Agent,
    base_url: String,
}

#[derive(Deserialize)]
struct AuthCheck {
    authenticated: bool,
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    secrets: Vec<SecretSummary>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpApi {
    /// Build a client for the configured server. One agent per process:
    /// the session cookie lives and dies with it.
    pub fn new(settings: &Settings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("vaultlink/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            base_url: settings.server_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Pull the server's `{error}` message out of a rejection body.
fn rejection_message(response: ureq::Response, fallback: &str) -> String {
    response
        .into_json::<ErrorBody>()
        .map(|body| body.error)
        .unwrap_or_else(|_| fallback.to_string())
}

/// Map a request error on an authenticated-area endpoint.
///
/// A 401 means the session is gone and the whole app must drop back to
/// the login view; any other non-2xx is a structured rejection scoped to
/// the operation that caused it.
fn map_error(err: ureq::Error, fallback: &str) -> VaultLinkError {
    match err {
        ureq::Error::Status(401, _) => VaultLinkError::Unauthorized,
        ureq::Error::Status(status, response) => VaultLinkError::ServerRejected {
            status,
            message: rejection_message(response, fallback),
        },
        ureq::Error::Transport(transport) => VaultLinkError::Network(transport.to_string()),
    }
}

impl SecretsApi for HttpApi {
    fn check_auth(&self) -> Result<bool> {
        let response = self
            .agent
            .get(&self.url("/api/auth/check"))
            .call()
            .map_err(|e| map_error(e, "auth check failed"))?;

        let body: AuthCheck = response
            .into_json()
            .map_err(|e| VaultLinkError::Network(e.to_string()))?;
        Ok(body.authenticated)
    }

    fn login(&self, password: &str) -> Result<()> {
        // A 401 here is a rejected password, not an expired session, so
        // it keeps the server's message instead of mapping to Unauthorized.
        let result = self
            .agent
            .post(&self.url("/api/auth/login"))
            .send_json(serde_json::json!({ "password": password }));

        match result {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, response)) => Err(VaultLinkError::ServerRejected {
                status,
                message: rejection_message(response, "Login failed. Please try again."),
            }),
            Err(ureq::Error::Transport(transport)) => {
                Err(VaultLinkError::Network(transport.to_string()))
            }
        }
    }

    fn logout(&self) -> Result<()> {
        self.agent
            .post(&self.url("/api/auth/logout"))
            .call()
            .map_err(|e| map_error(e, "logout failed"))?;
        Ok(())
    }

    fn list_secrets(&self) -> Result<Vec<SecretSummary>> {
        let response = self
            .agent
            .get(&self.url("/api/secrets"))
            .call()
            .map_err(|e| map_error(e, "Failed to load secrets"))?;

        let body: ListResponse = response
            .into_json()
            .map_err(|e| VaultLinkError::Network(e.to_string()))?;
        Ok(body.secrets)
    }

    fn get_secret(&self, id: &str) -> Result<SecretRecord> {
        let response = self
            .agent
            .get(&self.url(&format!("/api/secrets/{id}")))
            .call()
            .map_err(|e| map_error(e, "Failed to fetch secret"))?;

        response
            .into_json()
            .map_err(|e| VaultLinkError::Network(e.to_string()))
    }

    fn create_secret(&self, request: &CreateSecret<'_>) -> Result<()> {
        self.agent
            .post(&self.url("/api/secrets"))
            .send_json(request)
            .map_err(|e| map_error(e, "Failed to save secret"))?;
        Ok(())
    }

    fn update_secret(&self, id: &str, secret: &str) -> Result<()> {
        self.agent
            .put(&self.url(&format!("/api/secrets/{id}")))
            .send_json(UpdateSecret { secret })
            .map_err(|e| map_error(e, "Failed to save secret"))?;
        Ok(())
    }

    fn delete_secret(&self, id: &str) -> Result<()> {
        self.agent
            .delete(&self.url(&format!("/api/secrets/{id}")))
            .call()
            .map_err(|e| map_error(e, "Failed to delete secret"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_for(server_url: &str) -> HttpApi {
        let settings = Settings {
            server_url: server_url.to_string(),
            ..Settings::default()
        };
        HttpApi::new(&settings)
    }

    #[test]
    fn url_joins_without_double_slash() {
        let api = api_for("http://localhost:5000/");
        assert_eq!(api.url("/api/secrets"), "http://localhost:5000/api/secrets");
    }

    #[test]
    fn url_keeps_plain_base() {
        let api = api_for("https://vault.example.com");
        assert_eq!(
            api.url("/api/auth/check"),
            "https://vault.example.com/api/auth/check"
        );
    }

    #[test]
    fn status_401_maps_to_unauthorized() {
        let response = ureq::Response::new(401, "Unauthorized", "{}").unwrap();
        let err = map_error(ureq::Error::Status(401, response), "fallback");
        assert!(matches!(err, VaultLinkError::Unauthorized));
    }

    #[test]
    fn rejection_keeps_server_message() {
        let response =
            ureq::Response::new(400, "Bad Request", r#"{"error": "Label and secret are required"}"#)
                .unwrap();
        let err = map_error(ureq::Error::Status(400, response), "fallback");
        match err {
            VaultLinkError::ServerRejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Label and secret are required");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejection_without_body_uses_fallback() {
        let response = ureq::Response::new(500, "Internal Server Error", "oops").unwrap();
        let err = map_error(ureq::Error::Status(500, response), "Failed to save secret");
        match err {
            VaultLinkError::ServerRejected { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to save secret");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
