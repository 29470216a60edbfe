//! `vaultlink edit` — replace a secret's payload.
//!
//! Label and type are fixed at creation; the server never sees them in
//! an update request, so this command only prompts for the new value.

use dialoguer::Input;
use zeroize::Zeroize;

use crate::cli::output;
use crate::cli::{open_session, record_audit, Cli};
use crate::errors::{Result, VaultLinkError};

/// Execute the `edit` command.
pub fn execute(cli: &Cli, secret: &str) -> Result<()> {
    let (api, _session, mut store) = open_session(cli)?;

    let id = store.find(secret)?.id.clone();
    let record = store.fetch_one(&api, &id)?;
    let label = record.label.clone();

    // The locked fields are shown, not prompted for.
    output::info(&format!("Editing '{}' (type: {})", record.label, record.kind));

    let mut new_secret: String = Input::new()
        .with_prompt("Secret value")
        .with_initial_text(record.secret.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| VaultLinkError::CommandFailed(format!("value prompt: {e}")))?;

    let result = store.update(&api, &id, &new_secret);
    new_secret.zeroize();
    result?;

    record_audit(api.base_url(), "update", Some(&label), None);
    output::success(&format!("Secret '{label}' updated"));

    Ok(())
}
