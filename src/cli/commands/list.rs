//! `vaultlink list` — display secrets in a table.

use crate::cli::output;
use crate::cli::{open_session, Cli};
use crate::errors::Result;
use crate::filter::TypeFilter;

/// Execute the `list` command.
pub fn execute(cli: &Cli, type_name: &str, search: Option<&str>) -> Result<()> {
    // Validate the filter before any network or prompt activity.
    let type_filter = TypeFilter::parse(type_name)?;

    let (_api, _session, mut store) = open_session(cli)?;

    store.set_type_filter(type_filter);
    if let Some(query) = search {
        store.set_query(query);
    }

    output::info(&format!(
        "{} secret(s), {} matching the current view",
        store.len(),
        store.filtered().len()
    ));

    output::print_secrets_table(store.filtered());

    Ok(())
}
