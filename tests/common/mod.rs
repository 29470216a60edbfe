//! Shared in-memory fake of the vault server API.
//!
//! Call counters and scriptable failures let the store and workflow
//! tests assert exactly which requests an operation issued, including
//! the cases where the right answer is "none at all".

use std::cell::{Cell, RefCell};

use vaultlink::api::{CreateSecret, SecretRecord, SecretSummary, SecretType, SecretsApi};
use vaultlink::errors::{Result, VaultLinkError};

/// Scripted failure mode for a group of endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Failure {
    #[default]
    None,
    Unauthorized,
    Rejected,
    Network,
}

impl Failure {
    fn check(self) -> Result<()> {
        match self {
            Failure::None => Ok(()),
            Failure::Unauthorized => Err(VaultLinkError::Unauthorized),
            Failure::Rejected => Err(VaultLinkError::ServerRejected {
                status: 500,
                message: "internal server error".to_string(),
            }),
            Failure::Network => Err(VaultLinkError::Network("connection refused".to_string())),
        }
    }
}

struct StoredSecret {
    id: String,
    label: String,
    kind: SecretType,
    secret: String,
    creation_time: i64,
    update_time: i64,
}

/// In-memory server double. Interior mutability because the real API is
/// shared by `&dyn SecretsApi` reference.
pub struct FakeApi {
    records: RefCell<Vec<StoredSecret>>,
    pub accepted_password: String,
    pub authenticated: Cell<bool>,

    pub check_failure: Cell<Failure>,
    pub list_failure: Cell<Failure>,
    pub mutation_failure: Cell<Failure>,

    pub login_calls: Cell<usize>,
    pub logout_calls: Cell<usize>,
    pub list_calls: Cell<usize>,
    pub get_calls: Cell<usize>,
    pub create_calls: Cell<usize>,
    pub update_calls: Cell<usize>,
    pub delete_calls: Cell<usize>,

    /// `(id, payload)` pairs from every update request. The fact that a
    /// pair is all an update carries is itself part of the contract.
    pub update_log: RefCell<Vec<(String, String)>>,
    pub deleted_ids: RefCell<Vec<String>>,

    next_id: Cell<u64>,
    clock: Cell<i64>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            records: RefCell::new(Vec::new()),
            accepted_password: "correct".to_string(),
            authenticated: Cell::new(false),
            check_failure: Cell::new(Failure::None),
            list_failure: Cell::new(Failure::None),
            mutation_failure: Cell::new(Failure::None),
            login_calls: Cell::new(0),
            logout_calls: Cell::new(0),
            list_calls: Cell::new(0),
            get_calls: Cell::new(0),
            create_calls: Cell::new(0),
            update_calls: Cell::new(0),
            delete_calls: Cell::new(0),
            update_log: RefCell::new(Vec::new()),
            deleted_ids: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            clock: Cell::new(1_700_000_000),
        }
    }

    /// Insert a secret server-side, returning its assigned id.
    pub fn seed(&self, label: &str, kind: SecretType, secret: &str) -> String {
        let id = self.next_id.get().to_string();
        self.next_id.set(self.next_id.get() + 1);
        self.seed_with_id(&id, label, kind, secret);
        id
    }

    /// Insert a secret with a caller-chosen id.
    pub fn seed_with_id(&self, id: &str, label: &str, kind: SecretType, secret: &str) {
        let now = self.tick();
        self.records.borrow_mut().push(StoredSecret {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            secret: secret.to_string(),
            creation_time: now,
            update_time: now,
        });
    }

    /// Server-side snapshot of one record, for assertions.
    pub fn record(&self, id: &str) -> Option<SecretRecord> {
        self.records
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .map(|r| SecretRecord {
                id: r.id.clone(),
                label: r.label.clone(),
                kind: r.kind,
                secret: r.secret.clone(),
                creation_time: r.creation_time,
                update_time: r.update_time,
            })
    }

    fn tick(&self) -> i64 {
        let t = self.clock.get() + 1;
        self.clock.set(t);
        t
    }
}

impl SecretsApi for FakeApi {
    fn check_auth(&self) -> Result<bool> {
        self.check_failure.get().check()?;
        Ok(self.authenticated.get())
    }

    fn login(&self, password: &str) -> Result<()> {
        self.login_calls.set(self.login_calls.get() + 1);
        if password == self.accepted_password {
            self.authenticated.set(true);
            Ok(())
        } else {
            Err(VaultLinkError::ServerRejected {
                status: 401,
                message: "Invalid master password".to_string(),
            })
        }
    }

    fn logout(&self) -> Result<()> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.authenticated.set(false);
        Ok(())
    }

    fn list_secrets(&self) -> Result<Vec<SecretSummary>> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.list_failure.get().check()?;

        Ok(self
            .records
            .borrow()
            .iter()
            .map(|r| SecretSummary {
                id: r.id.clone(),
                label: r.label.clone(),
                kind: r.kind,
                creation_time: r.creation_time,
                update_time: r.update_time,
            })
            .collect())
    }

    fn get_secret(&self, id: &str) -> Result<SecretRecord> {
        self.get_calls.set(self.get_calls.get() + 1);
        self.list_failure.get().check()?;

        self.record(id).ok_or_else(|| VaultLinkError::ServerRejected {
            status: 404,
            message: "Secret not found".to_string(),
        })
    }

    fn create_secret(&self, request: &CreateSecret<'_>) -> Result<()> {
        self.create_calls.set(self.create_calls.get() + 1);
        self.mutation_failure.get().check()?;

        self.seed(request.label, request.kind, request.secret);
        Ok(())
    }

    fn update_secret(&self, id: &str, secret: &str) -> Result<()> {
        self.update_calls.set(self.update_calls.get() + 1);
        self.update_log
            .borrow_mut()
            .push((id.to_string(), secret.to_string()));
        self.mutation_failure.get().check()?;

        let now = self.tick();
        let mut records = self.records.borrow_mut();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| VaultLinkError::ServerRejected {
                status: 404,
                message: "Secret not found".to_string(),
            })?;

        record.secret = secret.to_string();
        record.update_time = now;
        Ok(())
    }

    fn delete_secret(&self, id: &str) -> Result<()> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        self.mutation_failure.get().check()?;

        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(VaultLinkError::ServerRejected {
                status: 404,
                message: "Secret not found".to_string(),
            });
        }

        self.deleted_ids.borrow_mut().push(id.to_string());
        Ok(())
    }
}
