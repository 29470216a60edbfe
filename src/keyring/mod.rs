//! OS keyring integration for password caching.
//!
//! Stores and retrieves the vault master password from the operating
//! system's secure credential store, keyed by server URL:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring / KDE Wallet)
//!
//! All operations fail gracefully — if the keyring is unavailable, the
//! error is returned and the caller falls back to a password prompt.

use crate::errors::{Result, VaultLinkError};

/// Service name used in the OS keyring.
const SERVICE_NAME: &str = "vaultlink";

/// Build a keyring entry key from a server URL.
///
/// Different servers get independent entries, so one client can talk to
/// several vaults without the passwords colliding.
fn entry_key(server_url: &str) -> String {
    format!("server:{server_url}")
}

/// Store a password in the OS keyring for a specific server.
pub fn store_password(server_url: &str, password: &str) -> Result<()> {
    let entry = keyring::Entry::new(SERVICE_NAME, &entry_key(server_url))
        .map_err(|e| VaultLinkError::KeyringError(format!("failed to create keyring entry: {e}")))?;

    entry.set_password(password).map_err(|e| {
        VaultLinkError::KeyringError(format!("failed to store password in keyring: {e}"))
    })?;

    Ok(())
}

/// Retrieve a password from the OS keyring for a specific server.
///
/// Returns `None` if no password is stored (rather than an error).
pub fn get_password(server_url: &str) -> Result<Option<String>> {
    let entry = keyring::Entry::new(SERVICE_NAME, &entry_key(server_url))
        .map_err(|e| VaultLinkError::KeyringError(format!("failed to create keyring entry: {e}")))?;

    match entry.get_password() {
        Ok(password) => Ok(Some(password)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(VaultLinkError::KeyringError(format!(
            "failed to read from keyring: {e}"
        ))),
    }
}

/// Delete a stored password from the OS keyring.
pub fn delete_password(server_url: &str) -> Result<()> {
    let entry = keyring::Entry::new(SERVICE_NAME, &entry_key(server_url))
        .map_err(|e| VaultLinkError::KeyringError(format!("failed to create keyring entry: {e}")))?;

    match entry.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()), // Already gone, that's fine.
        Err(e) => Err(VaultLinkError::KeyringError(format!(
            "failed to delete from keyring: {e}"
        ))),
    }
}
