//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod clipboard;
pub mod commands;
pub mod output;

use clap::Parser;

use zeroize::Zeroizing;

use crate::api::{HttpApi, SecretType};
use crate::config::Settings;
use crate::errors::{Result, VaultLinkError};
use crate::session::Session;
use crate::store::SecretStore;

/// vaultlink CLI: terminal client for a self-hosted secrets vault server.
#[derive(Parser)]
#[command(
    name = "vaultlink",
    about = "Terminal client for a self-hosted secrets vault server",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault server URL (overrides the config file)
    #[arg(long, global = true, env = "VAULTLINK_SERVER")]
    pub server: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Open the interactive browser (list, search, view, add, edit, delete)
    Browse,

    /// List secrets in a table
    List {
        /// Only show secrets of this type (all, password, token, note)
        #[arg(short, long, default_value = "all")]
        r#type: String,

        /// Case-insensitive substring match against labels
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a single secret (payload hidden unless --reveal)
    Show {
        /// Secret label or id
        secret: String,

        /// Print the plaintext payload
        #[arg(long)]
        reveal: bool,

        /// Copy the plaintext payload to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Add a new secret
    Add {
        /// Display label (omit for interactive prompt)
        label: Option<String>,

        /// Secret type: password, token, or note
        #[arg(short, long)]
        r#type: Option<String>,
    },

    /// Replace a secret's payload (label and type are fixed at creation)
    Edit {
        /// Secret label or id
        secret: String,
    },

    /// Delete a secret
    Delete {
        /// Secret label or id
        secret: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Check server reachability and verify credentials
    Status,

    /// Manage authentication methods (keyring)
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// View the audit log of client operations
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,

        /// Show entries since a duration ago (e.g. 7d, 24h, 30m)
        #[arg(long)]
        since: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// Auth subcommands for keyring management.
#[derive(clap::Subcommand)]
pub enum AuthAction {
    /// Save the master password to the OS keyring (auto-login)
    Keyring {
        /// Remove the password from the keyring instead of saving
        #[arg(long)]
        delete: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `VAULTLINK_PASSWORD` env var (CI/scripts)
/// 2. OS keyring (if compiled with `keyring-store` feature)
/// 3. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password(server_url: &str) -> Result<Zeroizing<String>> {
    // 1. Check the environment variable first (CI/scripting friendly).
    if let Ok(pw) = std::env::var("VAULTLINK_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    // 2. Try the OS keyring (if the feature is enabled).
    #[cfg(feature = "keyring-store")]
    match crate::keyring::get_password(server_url) {
        Ok(Some(pw)) => return Ok(Zeroizing::new(pw)),
        Ok(None) => {} // No stored password, continue to prompt.
        Err(_) => {}   // Keyring unavailable, continue to prompt.
    }

    // Suppress unused variable warning when the keyring feature is off.
    #[cfg(not(feature = "keyring-store"))]
    let _ = server_url;

    // 3. Fall back to interactive prompt.
    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| VaultLinkError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Resolve effective settings: config file values overridden by the
/// `--server` flag (which clap also feeds from `VAULTLINK_SERVER`).
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load()?;
    if let Some(server) = &cli.server {
        settings.server_url = server.clone();
    }
    Ok(settings)
}

/// Build the API client, authenticate, and load the collection.
///
/// Shared by the one-shot commands; `browse` runs its own login loop
/// so it can retry a rejected password.
pub fn open_session(cli: &Cli) -> Result<(HttpApi, Session, SecretStore)> {
    let settings = resolve_settings(cli)?;
    let api = HttpApi::new(&settings);

    let mut session = Session::new();
    let password = prompt_password(&settings.server_url)?;
    session.login(&api, &password)?;

    let mut store = SecretStore::new();
    store.load(&api)?;

    Ok((api, session, store))
}

/// Parse a user-typed secret type name (for `--type` arguments).
pub fn parse_secret_type(name: &str) -> Result<SecretType> {
    SecretType::parse(name).ok_or_else(|| {
        VaultLinkError::Validation(format!(
            "unknown type '{name}' — supported: password, token, note"
        ))
    })
}

/// Interactive type picker for the add dialog.
pub fn select_secret_type() -> Result<SecretType> {
    let items: Vec<&str> = SecretType::SELECTABLE.iter().map(|k| k.as_str()).collect();
    let index = dialoguer::Select::new()
        .with_prompt("Type")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| VaultLinkError::CommandFailed(format!("type prompt: {e}")))?;
    Ok(SecretType::SELECTABLE[index])
}

/// Record an audit event when the audit-log feature is enabled.
pub fn record_audit(server: &str, operation: &str, label: Option<&str>, details: Option<&str>) {
    #[cfg(feature = "audit-log")]
    crate::audit::log_audit(server, operation, label, details);

    #[cfg(not(feature = "audit-log"))]
    let _ = (server, operation, label, details);
}
