//! `vaultlink status` — server reachability and credential check.
//!
//! A fresh process never has a session cookie, so the auth check mostly
//! proves the server is up and speaking the protocol; the login step
//! then verifies the configured credential end-to-end.

use crate::api::{HttpApi, SecretsApi};
use crate::cli::output;
use crate::cli::{prompt_password, resolve_settings, Cli};
use crate::errors::Result;
use crate::session::Session;

/// Execute the `status` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = resolve_settings(cli)?;
    let api = HttpApi::new(&settings);

    output::info(&format!("Server: {}", settings.server_url));

    match api.check_auth() {
        Ok(_) => output::success("Server reachable."),
        Err(e) => {
            output::error(&e.to_string());
            return Ok(());
        }
    }

    let mut session = Session::new();
    let password = prompt_password(&settings.server_url)?;
    match session.login(&api, &password) {
        Ok(()) => output::success("Credentials verified."),
        Err(e) => output::error(&format!("Login failed: {e}")),
    }

    Ok(())
}
