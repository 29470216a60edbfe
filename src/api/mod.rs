//! API module — wire types and the vault server client.
//!
//! This module provides:
//! - `SecretType`, `SecretSummary`, and `SecretRecord` wire types (`types`)
//! - The `SecretsApi` trait every core component talks through
//! - `HttpApi`, the blocking HTTP/JSON implementation (`client`)

pub mod client;
pub mod types;

// Re-export the most commonly used items.
pub use client::HttpApi;
pub use types::{CreateSecret, SecretRecord, SecretSummary, SecretType};

use crate::errors::Result;

/// Operations the vault server exposes to the client.
///
/// The session gate, secret store, and workflow controller all take the
/// API as `&dyn SecretsApi`, so tests can drive them against an
/// in-memory fake instead of a live server.
pub trait SecretsApi {
    /// GET /api/auth/check — is the current session cookie still valid?
    fn check_auth(&self) -> Result<bool>;

    /// POST /api/auth/login — authenticate with the master password.
    fn login(&self, password: &str) -> Result<()>;

    /// POST /api/auth/logout — invalidate the server-side session.
    fn logout(&self) -> Result<()>;

    /// GET /api/secrets — the full collection, without plaintext.
    fn list_secrets(&self) -> Result<Vec<SecretSummary>>;

    /// GET /api/secrets/{id} — a single secret including its plaintext.
    fn get_secret(&self, id: &str) -> Result<SecretRecord>;

    /// POST /api/secrets — create a new secret.
    fn create_secret(&self, request: &CreateSecret<'_>) -> Result<()>;

    /// PUT /api/secrets/{id} — replace a secret's payload. Label and
    /// type are immutable and never part of this request.
    fn update_secret(&self, id: &str, secret: &str) -> Result<()>;

    /// DELETE /api/secrets/{id} — remove a secret.
    fn delete_secret(&self, id: &str) -> Result<()>;
}
