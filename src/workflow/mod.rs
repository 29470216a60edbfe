//! Workflow controller — the modal state machine behind the CRUD dialogs.
//!
//! A long-lived loop with no terminal state:
//!
//! ```text
//! idle --add--> creating --save ok / cancel--> idle
//! idle --view--> viewing --close--> idle
//! viewing --edit--> editing --save ok / cancel--> idle
//! viewing --delete(confirmed)--> idle
//! ```
//!
//! The controller never touches the terminal; the CLI layer renders its
//! state and feeds user choices back in as method calls.

use crate::api::{SecretRecord, SecretsApi, SecretType};
use crate::errors::{Result, VaultLinkError};
use crate::store::SecretStore;

/// Current modal interaction mode.
///
/// `Viewing`/`Editing` reference the last-fetched record by id; the id
/// and the record are both cleared whenever the dialog closes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Creating,
    Editing {
        id: String,
    },
    Viewing {
        id: String,
    },
}

/// Drives the add/view/edit/delete dialog flows over the store.
#[derive(Debug, Default)]
pub struct Workflow {
    state: WorkflowState,

    /// The record backing the open view/edit dialog.
    current: Option<SecretRecord>,

    /// Plaintext visibility toggle, local to the open view dialog.
    revealed: bool,

    /// Guards against a second submission while a request for this
    /// dialog is still outstanding.
    pending: bool,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// The fetched record backing the open dialog, if any.
    pub fn current(&self) -> Option<&SecretRecord> {
        self.current.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    // ------------------------------------------------------------------
    // Opening dialogs
    // ------------------------------------------------------------------

    /// "Add" action: open an empty creation dialog. No server round-trip.
    pub fn open_add(&mut self) -> Result<()> {
        self.expect_idle("open the add dialog")?;
        self.state = WorkflowState::Creating;
        Ok(())
    }

    /// "View" action: fetch the full secret, then open the view dialog
    /// with the plaintext hidden. On fetch failure the dialog is not
    /// opened and the state is unchanged.
    pub fn open_view(&mut self, api: &dyn SecretsApi, store: &SecretStore, id: &str) -> Result<()> {
        self.expect_idle("open a secret")?;

        let record = store.fetch_one(api, id)?;
        self.state = WorkflowState::Viewing {
            id: record.id.clone(),
        };
        self.current = Some(record);
        self.revealed = false;
        Ok(())
    }

    /// "Edit" action: only reachable from an open view dialog. The form
    /// is prefilled from the already-fetched record. Label and type stay
    /// locked: the edit submission structurally carries only the
    /// payload, so a change to either field is impossible, not merely
    /// discouraged.
    pub fn start_edit(&mut self) -> Result<()> {
        let id = match (&self.state, &self.current) {
            (WorkflowState::Viewing { id }, Some(_)) => id.clone(),
            _ => {
                return Err(VaultLinkError::CommandFailed(
                    "no secret is open to edit".into(),
                ))
            }
        };

        self.state = WorkflowState::Editing { id };
        Ok(())
    }

    // ------------------------------------------------------------------
    // Submissions
    // ------------------------------------------------------------------

    /// Save from the creation dialog.
    ///
    /// Validation failures and server rejections both leave the dialog
    /// open (state unchanged) with the error surfaced to the caller;
    /// only a successful save closes it.
    pub fn submit_create(
        &mut self,
        api: &dyn SecretsApi,
        store: &mut SecretStore,
        label: &str,
        kind: SecretType,
        secret: &str,
    ) -> Result<()> {
        if self.state != WorkflowState::Creating {
            return Err(VaultLinkError::CommandFailed(
                "no creation dialog is open".into(),
            ));
        }

        self.begin_request()?;
        let result = store.create(api, label, kind, secret);
        self.pending = false;

        result?;
        self.close();
        Ok(())
    }

    /// Save from the edit dialog. Sends only the new payload.
    pub fn submit_edit(
        &mut self,
        api: &dyn SecretsApi,
        store: &mut SecretStore,
        secret: &str,
    ) -> Result<()> {
        let id = match &self.state {
            WorkflowState::Editing { id } => id.clone(),
            _ => {
                return Err(VaultLinkError::CommandFailed(
                    "no edit dialog is open".into(),
                ))
            }
        };

        self.begin_request()?;
        let result = store.update(api, &id, secret);
        self.pending = false;

        result?;
        self.close();
        Ok(())
    }

    /// Delete the viewed secret.
    ///
    /// Without confirmation this issues no request and returns `false`,
    /// leaving the view dialog open. With confirmation, a successful
    /// delete closes the dialog and reloads the collection.
    pub fn delete_current(
        &mut self,
        api: &dyn SecretsApi,
        store: &mut SecretStore,
        confirmed: bool,
    ) -> Result<bool> {
        let id = match &self.state {
            WorkflowState::Viewing { id } => id.clone(),
            _ => {
                return Err(VaultLinkError::CommandFailed(
                    "no secret is open to delete".into(),
                ))
            }
        };

        if !confirmed {
            return Ok(false);
        }

        self.begin_request()?;
        let result = store.delete(api, &id);
        self.pending = false;

        result?;
        self.close();
        Ok(true)
    }

    // ------------------------------------------------------------------
    // View-dialog toggles
    // ------------------------------------------------------------------

    /// Show/hide the plaintext in the view dialog. Pure presentation
    /// toggle: no request, no state transition.
    pub fn toggle_reveal(&mut self) {
        if matches!(self.state, WorkflowState::Viewing { .. }) {
            self.revealed = !self.revealed;
        }
    }

    /// Close whichever dialog is open. Always resets the edit lock, the
    /// reveal toggle, and the fetched record, so no stale state leaks
    /// into the next dialog.
    pub fn close(&mut self) {
        self.state = WorkflowState::Idle;
        self.current = None;
        self.revealed = false;
        self.pending = false;
    }

    fn begin_request(&mut self) -> Result<()> {
        if self.pending {
            return Err(VaultLinkError::RequestPending);
        }
        self.pending = true;
        Ok(())
    }

    fn expect_idle(&self, action: &str) -> Result<()> {
        if self.state != WorkflowState::Idle {
            return Err(VaultLinkError::CommandFailed(format!(
                "close the open dialog before trying to {action}"
            )));
        }
        Ok(())
    }
}
