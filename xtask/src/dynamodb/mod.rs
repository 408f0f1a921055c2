//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the memories tables.
    Deploy(DeployCommand),
}

/// Deploy or destroy the memories tables.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the memories DynamoDB tables.

Creates the items table (userId/itemId) and the attachments table
(itemId/attachmentId) when they are missing. Existing tables with the
expected keys are left alone.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the tables instead of creating them.
    #[arg(long)]
    pub destroy: bool,

    /// Items table name.
    #[arg(long, env = "ITEMS_TABLE", default_value = "memories-items")]
    pub items_table: String,

    /// Attachments table name.
    #[arg(long, env = "ATTACHMENT_TABLE", default_value = "memories-attachments")]
    pub attachment_table: String,
}

impl DeployCommand {
    fn table_configs(&self) -> [config::TableConfig; 2] {
        [
            config::items_table_config(&self.items_table),
            config::attachments_table_config(&self.attachment_table),
        ]
    }
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
    }
}

fn confirm(prompt: &str, default: bool) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await;

    if cmd.destroy {
        run_destroy(&dynamo_client, &cmd, global).await
    } else {
        run_create(&dynamo_client, &cmd, global).await
    }
}

async fn run_create(
    dynamo_client: &aws_sdk_dynamodb::Client,
    cmd: &DeployCommand,
    global: &crate::Global,
) -> Result<()> {
    let mut plans = Vec::new();
    for desired in cmd.table_configs() {
        let current = client::get_table_state(dynamo_client, &desired.table_name).await?;
        plans.push(planning::calculate_deploy_plan(current.as_ref(), &desired));
    }

    if !global.is_silent() {
        aprintln!("{}", p_c("Deploy Plan:"));
        for line in plans.iter().flat_map(planning::format_deploy_plan) {
            aprintln!("  {}", p_plan_line(&line));
        }
        aprintln!();
    }

    // A conflicting table cannot be fixed in place, so stop before touching anything.
    if let Some(conflict) = plans
        .iter()
        .find(|p| matches!(p, planning::TablePlan::Conflict { .. }))
    {
        return deploy::execute_deploy_plan(dynamo_client, conflict).await;
    }

    if !planning::has_deploy_changes(&plans) {
        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure is up to date."));
        }
        return Ok(());
    }

    if !cmd.force {
        confirm("Apply these changes?", true)?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Applying changes..."));
    }

    for plan in &plans {
        deploy::execute_deploy_plan(dynamo_client, plan).await?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_g("Infrastructure deployed successfully."));
    }

    Ok(())
}

async fn run_destroy(
    dynamo_client: &aws_sdk_dynamodb::Client,
    cmd: &DeployCommand,
    global: &crate::Global,
) -> Result<()> {
    let mut plans = Vec::new();
    for desired in cmd.table_configs() {
        let current = client::get_table_state(dynamo_client, &desired.table_name).await?;
        plans.push(planning::calculate_destroy_plan(
            current.as_ref(),
            &desired.table_name,
        ));
    }

    if !global.is_silent() {
        aprintln!("{}", p_y("Destroy Plan:"));
        for line in plans.iter().flat_map(planning::format_destroy_plan) {
            aprintln!("  {}", p_plan_line(&line));
        }
        aprintln!();
    }

    if !planning::has_destroy_changes(&plans) {
        if !global.is_silent() {
            aprintln!("{}", p_g("Nothing to destroy."));
        }
        return Ok(());
    }

    if !cmd.force {
        confirm(
            "Are you sure you want to delete these tables? ALL DATA WILL BE LOST",
            false,
        )?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Deleting tables..."));
    }

    for plan in &plans {
        deploy::execute_destroy_plan(dynamo_client, plan).await?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_g("Tables destroyed successfully."));
    }

    Ok(())
}
