use clap::Parser;
use vaultlink::cli::{AuthAction, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Browse => vaultlink::cli::commands::browse::execute(&cli),
        Commands::List {
            ref r#type,
            ref search,
        } => vaultlink::cli::commands::list::execute(&cli, r#type, search.as_deref()),
        Commands::Show {
            ref secret,
            reveal,
            copy,
        } => vaultlink::cli::commands::show::execute(&cli, secret, reveal, copy),
        Commands::Add {
            ref label,
            ref r#type,
        } => vaultlink::cli::commands::add::execute(&cli, label.as_deref(), r#type.as_deref()),
        Commands::Edit { ref secret } => vaultlink::cli::commands::edit::execute(&cli, secret),
        Commands::Delete { ref secret, force } => {
            vaultlink::cli::commands::delete::execute(&cli, secret, force)
        }
        Commands::Status => vaultlink::cli::commands::status::execute(&cli),
        Commands::Auth { ref action } => match action {
            AuthAction::Keyring { delete } => {
                vaultlink::cli::commands::auth::execute_keyring(&cli, *delete)
            }
        },
        Commands::Audit { last, ref since } => {
            vaultlink::cli::commands::audit_cmd::execute(&cli, last, since.as_deref())
        }
        Commands::Completions { ref shell } => vaultlink::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        vaultlink::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
