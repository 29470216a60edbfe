//! Wire types shared with the vault server.
//!
//! The list endpoint returns `SecretSummary` values with no plaintext;
//! only the single-item fetch returns a full `SecretRecord`, and its
//! payload is wiped from memory when the record is dropped.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Category tag attached to every secret. Fixed at creation time.
///
/// Tags this client doesn't know about (a newer server, say) deserialize
/// to `Other` so the list view still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretType {
    Password,
    Token,
    Note,
    #[serde(other)]
    Other,
}

impl SecretType {
    /// The types a user can pick when creating a secret.
    pub const SELECTABLE: [SecretType; 3] =
        [SecretType::Password, SecretType::Token, SecretType::Note];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecretType::Password => "password",
            SecretType::Token => "token",
            SecretType::Note => "note",
            SecretType::Other => "other",
        }
    }

    /// Parse a user-typed type name. `Other` is not selectable.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "password" => Some(SecretType::Password),
            "token" => Some(SecretType::Token),
            "note" => Some(SecretType::Note),
            _ => None,
        }
    }
}

impl fmt::Display for SecretType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the list view. Never carries the plaintext payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretSummary {
    /// Opaque server-assigned identifier, stable for the secret's lifetime.
    pub id: String,

    /// Display name, immutable after creation.
    pub label: String,

    #[serde(rename = "type")]
    pub kind: SecretType,

    /// Server-assigned creation timestamp, epoch seconds.
    pub creation_time: i64,

    /// Advances on every successful edit. Epoch seconds.
    pub update_time: i64,
}

/// A fully fetched secret, plaintext included. Held only while the
/// view/edit dialog it backs is open.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretRecord {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SecretType,
    /// The plaintext payload, the only field that may change after creation.
    pub secret: String,
    pub creation_time: i64,
    pub update_time: i64,
}

impl Drop for SecretRecord {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

/// Request body for POST /api/secrets.
#[derive(Debug, Serialize)]
pub struct CreateSecret<'a> {
    pub label: &'a str,
    #[serde(rename = "type")]
    pub kind: SecretType,
    pub secret: &'a str,
}

/// Request body for PUT /api/secrets/{id}. Carrying only the payload is
/// what makes the edit dialog's label/type lock a hard guarantee.
#[derive(Debug, Serialize)]
pub struct UpdateSecret<'a> {
    pub secret: &'a str,
}
