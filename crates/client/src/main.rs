//! memories CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use serde_json::Map;
use tracing_subscriber::EnvFilter;

use memories_client::cli::items::ItemsAction;
use memories_client::cli::{Cli, Commands};
use memories_client::output::{pretty, render};
use memories_client::{ItemsView, MemoriesClient, Result};
use memories_core::items::UpdateItemRequest;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "memories_client=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = MemoriesClient::new(&cli.base_url, &cli.token);
    let mut view = ItemsView::new(client);

    let Commands::Items(items_cmd) = cli.command;
    match items_cmd.action {
        ItemsAction::List => {
            let items = view.load().await?;
            println!("{}", render(items, cli.format, pretty::format_items)?);
        }
        ItemsAction::Create {
            name,
            description,
            date,
        } => {
            let today = chrono::Local::now().date_naive();
            let item = view.create(name, description, date, today).await?;
            println!(
                "{}",
                render(item, cli.format, |i| format!(
                    "Created:\n{}",
                    pretty::format_item(i)
                ))?
            );
        }
        ItemsAction::Update {
            id,
            name,
            date,
            description,
        } => {
            let mut req = UpdateItemRequest::new(name, date);
            req.description = description;
            let item = view.update(&id, &req).await?;
            println!(
                "{}",
                render(&item, cli.format, |i| format!(
                    "Updated:\n{}",
                    pretty::format_item(i)
                ))?
            );
        }
        ItemsAction::Delete { id } => {
            view.delete(&id).await?;
            if !cli.quiet {
                println!("Deleted item {}", id);
            }
        }
        ItemsAction::Attach { id, file } => {
            let mut fields = Map::new();
            if let Some(name) = file.as_deref().and_then(|p| p.file_name()) {
                fields.insert(
                    "fileName".to_string(),
                    name.to_string_lossy().into_owned().into(),
                );
            }

            let upload = view.attach(&id, &fields).await?;
            println!("{}", render(&upload, cli.format, pretty::format_upload)?);

            if let Some(path) = file {
                let contents = tokio::fs::read(&path).await?;
                view.api().upload_file(&upload.upload_url, contents).await?;
                if !cli.quiet {
                    println!("Uploaded {}", path.display());
                }
            }
        }
        ItemsAction::Attachments { id } => {
            let records = view.api().list_attachments(&id).await?;
            println!(
                "{}",
                render(&records[..], cli.format, pretty::format_attachments)?
            );
        }
    }

    Ok(())
}
