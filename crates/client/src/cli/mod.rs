//! CLI command definitions.

pub mod items;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the memories API.
#[derive(Debug, Parser)]
#[command(name = "memories-client")]
#[command(about = "CLI client for the memories API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "MEMORIES_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Bearer token identifying the caller.
    #[arg(long, env = "MEMORIES_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Item management.
    Items(items::ItemsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use items::ItemsAction;

    #[test]
    fn test_parse_create_without_date() {
        let cli = Cli::try_parse_from([
            "memories-client",
            "--token",
            "abc",
            "items",
            "create",
            "--name",
            "Birth",
            "--description",
            "Hamza",
        ])
        .unwrap();

        assert_eq!(cli.token, "abc");
        let Commands::Items(cmd) = cli.command;
        match cmd.action {
            ItemsAction::Create {
                name,
                description,
                date,
            } => {
                assert_eq!(name, "Birth");
                assert_eq!(description, "Hamza");
                assert!(date.is_none());
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_parse_attach_with_file() {
        let cli = Cli::try_parse_from([
            "memories-client",
            "--token",
            "abc",
            "--format",
            "json",
            "items",
            "attach",
            "item-1",
            "--file",
            "photo.jpg",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        let Commands::Items(cmd) = cli.command;
        match cmd.action {
            ItemsAction::Attach { id, file } => {
                assert_eq!(id, "item-1");
                assert_eq!(file.unwrap().to_str(), Some("photo.jpg"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_update_requires_name_and_date() {
        let result = Cli::try_parse_from([
            "memories-client", "--token", "abc", "items", "update", "item-1", "--name", "Birth",
        ]);

        assert!(result.is_err());
    }
}
