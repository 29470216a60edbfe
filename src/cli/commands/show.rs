//! `vaultlink show` — display a single secret.
//!
//! The payload stays masked unless `--reveal` is passed; `--copy` puts
//! it on the clipboard without printing it.

use crate::cli::{clipboard, open_session, output, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, secret: &str, reveal: bool, copy: bool) -> Result<()> {
    let (api, _session, store) = open_session(cli)?;

    let id = store.find(secret)?.id.clone();
    let record = store.fetch_one(&api, &id)?;

    output::print_secret_details(&record, reveal);

    if copy {
        match clipboard::copy_text(&record.secret) {
            Ok(()) => output::success("Copied to clipboard."),
            Err(e) => output::warning(&e.to_string()),
        }
    }

    if !reveal && !copy {
        output::tip("Re-run with --reveal to print the payload, or --copy to copy it.");
    }

    Ok(())
}
