//! `vaultlink browse` — the interactive client.
//!
//! A long-lived modal loop mirroring the workflow state machine: a
//! login view, a main list view with search and type filtering, and
//! view/add/edit/delete dialogs. Every mutation round-trips through the
//! server and reloads the list; a 401 anywhere drops back to the login
//! view and discards the in-memory collection.

use std::io::IsTerminal;

use dialoguer::{Confirm, Input, Select};
use zeroize::Zeroizing;

use crate::api::HttpApi;
use crate::cli::output;
use crate::cli::{
    clipboard, prompt_password, record_audit, resolve_settings, select_secret_type, Cli,
};
use crate::errors::{Result, VaultLinkError};
use crate::filter::TypeFilter;
use crate::session::Session;
use crate::store::SecretStore;
use crate::workflow::Workflow;

/// Execute the `browse` command.
pub fn execute(cli: &Cli) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(VaultLinkError::CommandFailed(
            "browse needs an interactive terminal".into(),
        ));
    }

    let settings = resolve_settings(cli)?;
    let api = HttpApi::new(&settings);

    let mut session = Session::new();
    let mut store = SecretStore::new();
    let mut workflow = Workflow::new();

    output::info(&format!("Connecting to {}", settings.server_url));

    // Session gate: only a valid session reveals the main view.
    if !session.check(&api) {
        login_view(&api, &mut session)?;
    }

    // Initial load. A 401 here means the session died between the check
    // and the load, so run the login view once more before giving up.
    match store.load(&api) {
        Ok(()) => {}
        Err(VaultLinkError::Unauthorized) => {
            session.invalidate();
            login_view(&api, &mut session)?;
            store.load(&api)?;
        }
        Err(other) => return Err(other),
    }

    main_loop(&api, &mut session, &mut store, &mut workflow)
}

/// The login view: prompt until the server accepts a password.
///
/// The first attempt goes through the normal password sources (env var,
/// keyring); retries always prompt interactively so a bad stored
/// password can't loop forever. An empty password is rejected locally
/// without a request, and a rejected password shows the server's
/// message and leaves the session untouched.
fn login_view(api: &HttpApi, session: &mut Session) -> Result<()> {
    let mut first_attempt = true;

    loop {
        let password = if first_attempt {
            first_attempt = false;
            prompt_password(api.base_url())?
        } else {
            Zeroizing::new(
                dialoguer::Password::new()
                    .with_prompt("Master password")
                    .allow_empty_password(true)
                    .interact()
                    .map_err(|e| VaultLinkError::CommandFailed(format!("password prompt: {e}")))?,
            )
        };

        match session.login(api, &password) {
            Ok(()) => {
                record_audit(api.base_url(), "login", None, None);
                output::success("Logged in.");
                return Ok(());
            }
            Err(
                e @ (VaultLinkError::Validation(_)
                | VaultLinkError::ServerRejected { .. }
                | VaultLinkError::Network(_)),
            ) => {
                output::error(&e.to_string());
            }
            Err(other) => return Err(other),
        }
    }
}

/// The main view: render the filtered list and dispatch one action per
/// iteration until the user quits.
fn main_loop(
    api: &HttpApi,
    session: &mut Session,
    store: &mut SecretStore,
    workflow: &mut Workflow,
) -> Result<()> {
    loop {
        render_list(store);

        let actions = [
            "View a secret",
            "Add a secret",
            "Search",
            "Filter by type",
            "Refresh",
            "Logout",
            "Quit",
        ];
        let choice = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()
            .map_err(|e| VaultLinkError::CommandFailed(format!("action prompt: {e}")))?;

        let result = match choice {
            0 => view_dialog(api, store, workflow),
            1 => add_dialog(api, store, workflow),
            2 => search_prompt(store),
            3 => filter_prompt(store),
            4 => store.load(api),
            5 => {
                session.logout(api);
                store.clear();
                workflow.close();
                output::info("Logged out.");
                login_view(api, session)?;
                store.load(api)
            }
            _ => return Ok(()),
        };

        if let Err(e) = result {
            // A dead dialog never survives a failure; only the 401 path
            // additionally discards the collection and the session.
            workflow.close();
            match e {
                VaultLinkError::Unauthorized => {
                    session.invalidate();
                    store.clear();
                    output::warning("Session expired — please log in again.");
                    login_view(api, session)?;
                    store.load(api)?;
                }
                other => output::error(&other.to_string()),
            }
        }
    }
}

fn render_list(store: &SecretStore) {
    println!();

    let mut heading = format!("{} secret(s)", store.len());
    if !store.query().is_empty() {
        heading.push_str(&format!(", search: '{}'", store.query()));
    }
    if store.type_filter() != TypeFilter::All {
        heading.push_str(&format!(", type: {}", store.type_filter()));
    }
    output::info(&heading);

    output::print_secrets_table(store.filtered());
}

/// Pick a secret from the filtered view and run the view dialog.
fn view_dialog(api: &HttpApi, store: &mut SecretStore, workflow: &mut Workflow) -> Result<()> {
    if store.filtered().is_empty() {
        output::info("No secrets match the current view.");
        return Ok(());
    }

    let items: Vec<String> = store
        .filtered()
        .iter()
        .map(|s| format!("{} ({})", s.label, s.kind))
        .collect();

    let picked = Select::new()
        .with_prompt("Secret (Esc to cancel)")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| VaultLinkError::CommandFailed(format!("secret prompt: {e}")))?;

    let Some(index) = picked else {
        return Ok(());
    };

    // Fetch the full record; on failure the dialog is never opened.
    let id = store.filtered()[index].id.clone();
    workflow.open_view(api, store, &id)?;

    loop {
        {
            let Some(record) = workflow.current() else {
                return Ok(());
            };
            println!();
            output::print_secret_details(record, workflow.is_revealed());
        }

        let toggle = if workflow.is_revealed() { "Hide" } else { "Show" };
        let actions = [toggle, "Copy to clipboard", "Edit", "Delete", "Back"];
        let choice = Select::new()
            .with_prompt("Secret action")
            .items(&actions)
            .default(0)
            .interact()
            .map_err(|e| VaultLinkError::CommandFailed(format!("action prompt: {e}")))?;

        match choice {
            0 => workflow.toggle_reveal(),
            1 => copy_current(workflow),
            2 => return edit_dialog(api, store, workflow),
            3 => {
                let label = workflow
                    .current()
                    .map(|r| r.label.clone())
                    .unwrap_or_default();

                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete \"{label}\"?"))
                    .default(false)
                    .interact()
                    .map_err(|e| VaultLinkError::CommandFailed(format!("confirm prompt: {e}")))?;

                if workflow.delete_current(api, store, confirmed)? {
                    record_audit(api.base_url(), "delete", Some(&label), None);
                    output::success(&format!("Deleted secret '{label}'"));
                    return Ok(());
                }

                output::info("Cancelled.");
            }
            _ => {
                workflow.close();
                return Ok(());
            }
        }
    }
}

/// The creation dialog. Validation and server rejections keep the
/// dialog open for another try; only a successful save closes it.
fn add_dialog(api: &HttpApi, store: &mut SecretStore, workflow: &mut Workflow) -> Result<()> {
    workflow.open_add()?;

    let mut label = String::new();

    loop {
        label = Input::new()
            .with_prompt("Label")
            .with_initial_text(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| VaultLinkError::CommandFailed(format!("label prompt: {e}")))?;

        let kind = select_secret_type()?;

        let secret = Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Secret value")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| VaultLinkError::CommandFailed(format!("value prompt: {e}")))?,
        );

        match workflow.submit_create(api, store, &label, kind, &secret) {
            Ok(()) => {
                record_audit(api.base_url(), "create", Some(label.trim()), Some(kind.as_str()));
                output::success(&format!("Secret '{}' created", label.trim()));
                return Ok(());
            }
            Err(
                e @ (VaultLinkError::Validation(_)
                | VaultLinkError::ServerRejected { .. }
                | VaultLinkError::Network(_)),
            ) => {
                output::error(&e.to_string());

                let retry = Confirm::new()
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()
                    .map_err(|e| VaultLinkError::CommandFailed(format!("confirm prompt: {e}")))?;
                if !retry {
                    workflow.close();
                    return Ok(());
                }
            }
            Err(other) => return Err(other),
        }
    }
}

/// The edit dialog. Label and type render as fixed text; only the
/// payload is editable, prefilled with the already-fetched plaintext.
fn edit_dialog(api: &HttpApi, store: &mut SecretStore, workflow: &mut Workflow) -> Result<()> {
    workflow.start_edit()?;

    let (label, kind, current_value) = match workflow.current() {
        Some(record) => (record.label.clone(), record.kind, record.secret.clone()),
        None => {
            workflow.close();
            return Ok(());
        }
    };

    println!();
    output::info(&format!("Editing '{label}' (type: {kind}, both fixed)"));

    let mut initial = current_value;

    loop {
        let new_value: String = Input::new()
            .with_prompt("Secret value")
            .with_initial_text(initial.clone())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| VaultLinkError::CommandFailed(format!("value prompt: {e}")))?;

        match workflow.submit_edit(api, store, &new_value) {
            Ok(()) => {
                record_audit(api.base_url(), "update", Some(&label), None);
                output::success(&format!("Secret '{label}' updated"));
                return Ok(());
            }
            Err(
                e @ (VaultLinkError::Validation(_)
                | VaultLinkError::ServerRejected { .. }
                | VaultLinkError::Network(_)),
            ) => {
                output::error(&e.to_string());

                let retry = Confirm::new()
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()
                    .map_err(|e| VaultLinkError::CommandFailed(format!("confirm prompt: {e}")))?;
                if !retry {
                    workflow.close();
                    return Ok(());
                }

                initial = new_value;
            }
            Err(other) => return Err(other),
        }
    }
}

/// Update the search query; the view reprojects synchronously.
fn search_prompt(store: &mut SecretStore) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("Search labels (empty to clear)")
        .with_initial_text(store.query().to_string())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| VaultLinkError::CommandFailed(format!("search prompt: {e}")))?;

    store.set_query(&query);
    Ok(())
}

/// Update the category filter; the view reprojects synchronously.
fn filter_prompt(store: &mut SecretStore) -> Result<()> {
    let items = ["all", "password", "token", "note"];
    let current = items
        .iter()
        .position(|i| *i == store.type_filter().to_string())
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt("Show type")
        .items(&items)
        .default(current)
        .interact()
        .map_err(|e| VaultLinkError::CommandFailed(format!("filter prompt: {e}")))?;

    store.set_type_filter(TypeFilter::parse(items[index])?);
    Ok(())
}

/// Best-effort clipboard copy of the viewed plaintext. Failure is
/// reported and changes nothing.
fn copy_current(workflow: &Workflow) {
    let Some(record) = workflow.current() else {
        return;
    };

    match clipboard::copy_text(&record.secret) {
        Ok(()) => output::success("Copied!"),
        Err(e) => output::warning(&e.to_string()),
    }
}
