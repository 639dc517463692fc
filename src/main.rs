use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sonarr_client::{Configuration, SonarrClient};
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for shows by name
    Search { term: String },
    /// List root folders
    Folders,
    /// List quality profiles
    Profiles {
        /// Endpoint path (`profile` on Sonarr v2, `qualityprofile` on v3)
        #[arg(long, default_value = "profile")]
        path: String,
    },
    /// List tracked shows
    Shows,
    /// Add a show, or monitor more seasons of one that is already tracked
    Add {
        #[arg(long)]
        tvdb_id: i32,
        /// Season to monitor, may be repeated
        #[arg(short, long = "season")]
        seasons: Vec<i32>,
        #[arg(long)]
        quality_profile: i32,
        #[arg(long)]
        root_folder: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = Configuration::from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    let client = SonarrClient::new(&config.sonarr).context("invalid Sonarr configuration")?;

    match cli.command {
        Command::Search { term } => print_json(&client.search_shows(&term).await?),
        Command::Folders => print_json(&client.get_folders().await?),
        Command::Profiles { path } => print_json(&client.get_profile(&path).await?),
        Command::Shows => print_json(&client.get_tv_shows().await?),
        Command::Add {
            tvdb_id,
            seasons,
            quality_profile,
            root_folder,
        } => {
            let results = client.search_shows(&format!("tvdb:{tvdb_id}")).await?;
            let Some(show) = results.into_iter().find(|s| s.tvdb_id == tvdb_id) else {
                warn!("No lookup result for TVDB id {}", tvdb_id);
                anyhow::bail!("series not found in lookup: tvdb:{tvdb_id}");
            };

            let added = client
                .add_tv_show(&show, &seasons, quality_profile, &root_folder)
                .await?;
            print_json(&added)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
