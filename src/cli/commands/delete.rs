//! `vaultlink delete` — remove a secret from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_session, record_audit, Cli};
use crate::errors::{Result, VaultLinkError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, secret: &str, force: bool) -> Result<()> {
    let (api, _session, mut store) = open_session(cli)?;

    let found = store.find(secret)?;
    let id = found.id.clone();
    let label = found.label.clone();

    // Unless --force is set, ask for confirmation before the request.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete secret '{label}'?"))
            .default(false)
            .interact()
            .map_err(|e| VaultLinkError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    store.delete(&api, &id)?;

    record_audit(api.base_url(), "delete", Some(&label), None);
    output::success(&format!("Deleted secret '{label}'"));

    Ok(())
}
