//! CLI entry point for managing graph models on the graph model service.
//!
//! Results are written to stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use mindleap_cli::input::{read_graph_model, read_valid_graph_model};
use mindleap_client::GraphModelService;
use mindleap_core::config::load_service_config;
use mindleap_core::{GenericResponse, GraphModelId};

#[derive(Parser)]
#[command(name = "mindleap")]
#[command(about = "Manage graph models on the Mindleap graph model service")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file prefix (default: mindleap).
    #[arg(short, long, default_value = "mindleap", global = true)]
    config: String,

    /// Override the service base URL.
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// List all stored graph models.
    List,
    /// Fetch one graph model by id or by name.
    Get {
        /// Graph model id (UUID).
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        id: Option<GraphModelId>,
        /// Graph model name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Store (create or replace) a graph model read from a JSON file.
    Store {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a graph model by id.
    Delete {
        #[arg(long)]
        id: GraphModelId,
    },
    /// Delete every stored graph model.
    Purge,
    /// Check a graph model file against the schema rules without contacting the service.
    Validate {
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Validate { file } => {
            let model = read_valid_graph_model(&file)?;
            tracing::info!(name = %model.name, "Graph model is valid");
            print_json(&GenericResponse::success())
        }
        Command::List => match connect(&cli.config, cli.base_url)?.get_graph_models().await {
            Ok(models) => print_json(&models),
            Err(response) => fail(response.into()),
        },
        Command::Get { id, name } => {
            let service = connect(&cli.config, cli.base_url)?;
            let found = match (id, name) {
                (Some(id), _) => service.get_graph_model_by_id(&id).await,
                (None, Some(name)) => service.get_graph_model_by_name(&name).await,
                (None, None) => anyhow::bail!("Specify --id or --name"),
            };
            match found {
                Ok(model) => print_json(&model),
                Err(response) => fail(response.into()),
            }
        }
        Command::Store { file } => {
            let model = read_graph_model(&file)?;
            let response = connect(&cli.config, cli.base_url)?
                .store_graph_model(&model)
                .await;
            if !response.is_success() {
                return fail(response.into());
            }
            print_json(&response)
        }
        Command::Delete { id } => {
            let service = connect(&cli.config, cli.base_url)?;
            respond(service.delete_graph_model(&id).await)
        }
        Command::Purge => {
            let service = connect(&cli.config, cli.base_url)?;
            respond(service.delete_all_graph_models().await)
        }
    }
}

fn connect(file_prefix: &str, base_url: Option<String>) -> anyhow::Result<GraphModelService> {
    let mut config = load_service_config(file_prefix)?;
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    Ok(GraphModelService::connect(&config)?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn respond(response: GenericResponse) -> anyhow::Result<()> {
    if !response.is_success() {
        return fail(response);
    }
    print_json(&response)
}

fn fail(response: GenericResponse) -> anyhow::Result<()> {
    anyhow::bail!(
        "{}",
        response
            .error_message
            .unwrap_or_else(|| "graph model service reported an error".to_string())
    )
}
