//! `vaultlink audit` — display the client operation history.
//!
//! Usage:
//!   vaultlink audit               # show last 50 entries
//!   vaultlink audit --last 20     # show last 20
//!   vaultlink audit --since 7d    # entries from last 7 days

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `audit` command.
#[cfg(feature = "audit-log")]
pub fn execute(_cli: &Cli, last: usize, since: Option<&str>) -> Result<()> {
    use crate::audit::AuditLog;
    use crate::cli::output;
    use crate::config::Settings;
    use crate::errors::VaultLinkError;

    let config_dir = Settings::config_dir()
        .ok_or_else(|| VaultLinkError::AuditError("could not resolve config directory".into()))?;

    let audit = AuditLog::open(&config_dir)
        .ok_or_else(|| VaultLinkError::AuditError("failed to open audit database".into()))?;

    let since_dt = match since {
        Some(s) => Some(parse_duration(s)?),
        None => None,
    };

    let entries = audit.query(last, since_dt)?;

    if entries.is_empty() {
        output::info("No audit entries found.");
        return Ok(());
    }

    print_audit_table(&entries);

    Ok(())
}

#[cfg(not(feature = "audit-log"))]
pub fn execute(_cli: &Cli, _last: usize, _since: Option<&str>) -> Result<()> {
    Err(crate::errors::VaultLinkError::AuditError(
        "audit log support not compiled — rebuild with default features".into(),
    ))
}

/// Parse a human-friendly duration string like "7d", "24h", "30m".
#[cfg(feature = "audit-log")]
fn parse_duration(input: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    use crate::errors::VaultLinkError;
    use chrono::Utc;

    let input = input.trim();

    let (num_str, unit) = if let Some(s) = input.strip_suffix('d') {
        (s, 'd')
    } else if let Some(s) = input.strip_suffix('h') {
        (s, 'h')
    } else if let Some(s) = input.strip_suffix('m') {
        (s, 'm')
    } else {
        return Err(VaultLinkError::CommandFailed(format!(
            "invalid duration '{input}' — use format like 7d, 24h, or 30m"
        )));
    };

    let num: i64 = num_str.parse().map_err(|_| {
        VaultLinkError::CommandFailed(format!(
            "invalid duration '{input}' — number part is not valid"
        ))
    })?;

    let duration = match unit {
        'd' => chrono::Duration::days(num),
        'h' => chrono::Duration::hours(num),
        'm' => chrono::Duration::minutes(num),
        _ => unreachable!(),
    };

    Ok(Utc::now() - duration)
}

/// Print audit entries in a formatted table.
#[cfg(feature = "audit-log")]
fn print_audit_table(entries: &[crate::audit::AuditEntry]) {
    use comfy_table::{ContentArrangement, Table};
    use console::style;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "Server", "Label", "Details"]);

    for entry in entries {
        let time = entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
        let op = colorize_operation(&entry.operation);
        let label = entry.label.as_deref().unwrap_or("-");
        let details = entry.details.as_deref().unwrap_or("-");

        table.add_row(vec![
            time,
            op,
            entry.server.clone(),
            label.to_string(),
            details.to_string(),
        ]);
    }

    println!(
        "{}",
        style(format!("{} audit entries:", entries.len())).bold()
    );
    println!("{table}");
}

/// Colorize operation names for display.
#[cfg(feature = "audit-log")]
fn colorize_operation(op: &str) -> String {
    use console::style;

    match op {
        "login" => style(op).cyan().to_string(),
        "create" => style(op).green().to_string(),
        "update" => style(op).blue().to_string(),
        "delete" => style(op).red().to_string(),
        _ => op.to_string(),
    }
}
