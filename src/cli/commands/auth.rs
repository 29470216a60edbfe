//! `vaultlink auth` — manage authentication methods (keyring).
//!
//! Subcommands:
//! - `vaultlink auth keyring`          — save the master password to the OS keyring
//! - `vaultlink auth keyring --delete` — remove it from the keyring
//!
//! When the keyring feature is not compiled in, these return a helpful
//! error message.

use crate::cli::Cli;
use crate::errors::{Result, VaultLinkError};

/// Execute `vaultlink auth keyring` — save or delete the password in the OS keyring.
pub fn execute_keyring(cli: &Cli, delete: bool) -> Result<()> {
    #[cfg(feature = "keyring-store")]
    {
        use crate::api::HttpApi;
        use crate::cli::{output, resolve_settings};
        use crate::session::Session;

        let settings = resolve_settings(cli)?;

        if delete {
            crate::keyring::delete_password(&settings.server_url)?;
            output::success("Password removed from OS keyring.");
        } else {
            // Verify the password against the server before storing it.
            // No keyring lookup here — the user is explicitly setting it.
            let password = dialoguer::Password::new()
                .with_prompt("Master password")
                .interact()
                .map_err(|e| VaultLinkError::CommandFailed(format!("password prompt: {e}")))?;

            let api = HttpApi::new(&settings);
            let mut session = Session::new();
            session.login(&api, &password)?;

            crate::keyring::store_password(&settings.server_url, &password)?;
            output::success("Password saved to OS keyring. Future logins will be automatic.");
        }

        Ok(())
    }

    #[cfg(not(feature = "keyring-store"))]
    {
        let _ = (cli, delete);
        Err(VaultLinkError::KeyringError(
            "keyring support not compiled — rebuild with `cargo build --features keyring-store`"
                .into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn keyring_disabled_returns_error() {
        // When compiled without the keyring-store feature, execute_keyring
        // should error instead of silently doing nothing.
        #[cfg(not(feature = "keyring-store"))]
        {
            use clap::Parser;
            let cli = crate::cli::Cli::parse_from(["vaultlink", "auth", "keyring"]);
            let result = super::execute_keyring(&cli, false);
            assert!(result.is_err());
            let msg = result.unwrap_err().to_string();
            assert!(
                msg.contains("keyring support not compiled"),
                "unexpected error: {msg}"
            );
        }
    }
}
