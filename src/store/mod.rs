//! Secret store — the client's copy of the server-side collection.
//!
//! Holds the full collection plus the filtered view derived from the
//! last-known search/filter state. The collection is only ever replaced
//! wholesale by `load`; every mutation round-trips through the server
//! and triggers a reload, never a local patch. The server stays
//! authoritative for ids and timestamps.

use crate::api::{CreateSecret, SecretRecord, SecretsApi, SecretSummary, SecretType};
use crate::errors::{Result, VaultLinkError};
use crate::filter::{self, TypeFilter};

/// The in-memory secret collection and its filtered projection.
#[derive(Debug, Default)]
pub struct SecretStore {
    /// Full collection in server order.
    secrets: Vec<SecretSummary>,

    /// Derived subsequence matching the query and type filter.
    filtered: Vec<SecretSummary>,

    /// Last-known search query, reapplied after every reload.
    query: String,

    /// Last-known category filter, reapplied after every reload.
    type_filter: TypeFilter,
}

impl SecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Synchronization
    // ------------------------------------------------------------------

    /// Fetch the full collection, replacing the local one wholesale.
    ///
    /// A 401 clears the collection before bubbling up, so stale data is
    /// never left around to render after the session has died. Any other
    /// failure leaves the previous collection untouched; the caller
    /// surfaces the error next to the existing render.
    pub fn load(&mut self, api: &dyn SecretsApi) -> Result<()> {
        match api.list_secrets() {
            Ok(secrets) => {
                self.secrets = secrets;
                self.reproject();
                Ok(())
            }
            Err(VaultLinkError::Unauthorized) => {
                self.clear();
                Err(VaultLinkError::Unauthorized)
            }
            Err(other) => Err(other),
        }
    }

    /// Retrieve a single secret including its plaintext payload.
    /// Failure leaves every piece of state unchanged.
    pub fn fetch_one(&self, api: &dyn SecretsApi, id: &str) -> Result<SecretRecord> {
        api.get_secret(id)
    }

    // ------------------------------------------------------------------
    // Mutations (validate, round-trip, resynchronize)
    // ------------------------------------------------------------------

    /// Create a secret, then resynchronize from the server.
    ///
    /// Validation failures never issue a request; a server rejection
    /// propagates so the active dialog can stay open with the message.
    pub fn create(
        &mut self,
        api: &dyn SecretsApi,
        label: &str,
        kind: SecretType,
        secret: &str,
    ) -> Result<()> {
        let label = label.trim();
        if label.is_empty() || secret.is_empty() {
            return Err(VaultLinkError::Validation(
                "Label and secret are required".into(),
            ));
        }

        api.create_secret(&CreateSecret {
            label,
            kind,
            secret,
        })?;
        self.load(api)
    }

    /// Replace a secret's payload, then resynchronize.
    ///
    /// Label and type are immutable once created and are never sent.
    pub fn update(&mut self, api: &dyn SecretsApi, id: &str, secret: &str) -> Result<()> {
        if secret.is_empty() {
            return Err(VaultLinkError::Validation("Secret is required".into()));
        }

        api.update_secret(id, secret)?;
        self.load(api)
    }

    /// Delete a secret, then resynchronize. The caller must already
    /// have obtained the user's confirmation.
    pub fn delete(&mut self, api: &dyn SecretsApi, id: &str) -> Result<()> {
        api.delete_secret(id)?;
        self.load(api)
    }

    // ------------------------------------------------------------------
    // Search and filter state
    // ------------------------------------------------------------------

    /// Update the search query and synchronously reproject.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.reproject();
    }

    /// Update the category filter and synchronously reproject.
    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.type_filter = type_filter;
        self.reproject();
    }

    /// Forget everything. Used on logout and session expiry.
    pub fn clear(&mut self) {
        self.secrets.clear();
        self.filtered.clear();
    }

    fn reproject(&mut self) {
        self.filtered = filter::project(&self.secrets, &self.query, self.type_filter);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The full collection, in server order.
    pub fn collection(&self) -> &[SecretSummary] {
        &self.secrets
    }

    /// The filtered view for the current query and type filter.
    pub fn filtered(&self) -> &[SecretSummary] {
        &self.filtered
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn type_filter(&self) -> TypeFilter {
        self.type_filter
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// Resolve a command-line argument to a secret.
    ///
    /// Ids win over labels (labels are not guaranteed unique), then an
    /// exact label match, then a unique case-insensitive label match.
    /// Ambiguity is an error rather than a guess.
    pub fn find(&self, needle: &str) -> Result<&SecretSummary> {
        if let Some(by_id) = self.secrets.iter().find(|s| s.id == needle) {
            return Ok(by_id);
        }

        let exact: Vec<&SecretSummary> =
            self.secrets.iter().filter(|s| s.label == needle).collect();
        match exact.len() {
            1 => return Ok(exact[0]),
            n if n > 1 => return Err(VaultLinkError::AmbiguousLabel(needle.to_string(), n)),
            _ => {}
        }

        let loose: Vec<&SecretSummary> = self
            .secrets
            .iter()
            .filter(|s| s.label.eq_ignore_ascii_case(needle))
            .collect();
        match loose.len() {
            0 => Err(VaultLinkError::SecretNotFound(needle.to_string())),
            1 => Ok(loose[0]),
            n => Err(VaultLinkError::AmbiguousLabel(needle.to_string(), n)),
        }
    }
}
