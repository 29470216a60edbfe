use thiserror::Error;

/// All errors that can occur in vaultlink.
#[derive(Debug, Error)]
pub enum VaultLinkError {
    // --- Validation errors (caught locally, never reach the server) ---
    #[error("{0}")]
    Validation(String),

    // --- Session errors ---
    #[error("Not authenticated — session expired or not logged in")]
    Unauthorized,

    // --- Server errors ---
    #[error("Server rejected the request: {message}")]
    ServerRejected { status: u16, message: String },

    #[error("Could not reach the server: {0}")]
    Network(String),

    #[error("No secret matching '{0}' was found")]
    SecretNotFound(String),

    #[error("Label '{0}' matches {1} secrets — pass the secret id instead")]
    AmbiguousLabel(String, usize),

    // --- Workflow errors ---
    #[error("A request for this dialog is still pending")]
    RequestPending,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- Clipboard errors ---
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    // --- Keyring errors ---
    #[error("Keyring error: {0}")]
    KeyringError(String),

    // --- Audit errors ---
    #[error("Audit error: {0}")]
    AuditError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for vaultlink results.
pub type Result<T> = std::result::Result<T, VaultLinkError>;
