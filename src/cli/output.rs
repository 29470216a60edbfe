//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command. Epoch timestamps from the
//! server are converted to local time here, at render time, and nowhere
//! else.

use chrono::{Local, TimeZone};
use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::api::{SecretRecord, SecretSummary};

/// Placeholder shown in place of a hidden payload.
pub const HIDDEN_PAYLOAD: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Format server epoch seconds as local time for display.
pub fn format_epoch(epoch_secs: i64) -> String {
    match Local.timestamp_opt(epoch_secs, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => "-".to_string(),
    }
}

/// Print a table of secret summaries (Label, Type, Created, Updated).
pub fn print_secrets_table(secrets: &[SecretSummary]) {
    if secrets.is_empty() {
        info("No secrets to show.");
        tip("Run `vaultlink add` to create your first secret.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Label", "Type", "Created", "Updated"]);

    for s in secrets {
        table.add_row(vec![
            s.label.clone(),
            s.kind.to_string(),
            format_epoch(s.creation_time),
            format_epoch(s.update_time),
        ]);
    }

    println!("{table}");
}

/// Print one secret's details, with the payload masked unless revealed.
pub fn print_secret_details(record: &SecretRecord, revealed: bool) {
    let payload = if revealed {
        record.secret.as_str()
    } else {
        HIDDEN_PAYLOAD
    };

    println!("{} {}", style("Label:  ").bold(), record.label);
    println!("{} {}", style("Type:   ").bold(), record.kind);
    println!("{} {}", style("Secret: ").bold(), payload);
    println!("{} {}", style("Created:").bold(), format_epoch(record.creation_time));
    println!("{} {}", style("Updated:").bold(), format_epoch(record.update_time));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_epoch_renders_valid_timestamps() {
        let rendered = format_epoch(1_700_000_000);
        assert_ne!(rendered, "-");
        assert!(rendered.contains("202"), "expected a date: {rendered}");
    }

    #[test]
    fn format_epoch_falls_back_on_out_of_range() {
        assert_eq!(format_epoch(i64::MAX), "-");
    }
}
