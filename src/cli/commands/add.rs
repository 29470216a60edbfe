//! `vaultlink add` — create a new secret.

use std::io::{self, IsTerminal, Read};

use dialoguer::Input;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{open_session, parse_secret_type, record_audit, select_secret_type, Cli};
use crate::errors::{Result, VaultLinkError};

/// Execute the `add` command.
pub fn execute(cli: &Cli, label: Option<&str>, type_name: Option<&str>) -> Result<()> {
    // Validate the type before any network or prompt activity.
    let preselected = match type_name {
        Some(name) => Some(parse_secret_type(name)?),
        None => None,
    };

    let (api, _session, mut store) = open_session(cli)?;

    let label = match label {
        Some(l) => l.to_string(),
        None => Input::<String>::new()
            .with_prompt("Label")
            .interact_text()
            .map_err(|e| VaultLinkError::CommandFailed(format!("label prompt: {e}")))?,
    };

    let kind = match preselected {
        Some(k) => k,
        None => select_secret_type()?,
    };

    // Determine the secret value from one of two sources.
    let secret = if !io::stdin().is_terminal() {
        // Source 1: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Zeroizing::new(buf.trim_end().to_string())
    } else {
        // Source 2: Interactive hidden prompt (default).
        Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt(format!("Value for '{label}'"))
                .allow_empty_password(true)
                .interact()
                .map_err(|e| VaultLinkError::CommandFailed(format!("value prompt: {e}")))?,
        )
    };

    store.create(&api, &label, kind, &secret)?;

    record_audit(api.base_url(), "create", Some(label.trim()), Some(kind.as_str()));
    output::success(&format!(
        "Secret '{}' created ({} total)",
        label.trim(),
        store.len()
    ));

    Ok(())
}
