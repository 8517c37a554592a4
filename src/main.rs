use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{
    compare::Compare, complete::Complete, locate::Locate, read_version::ReadVersion,
    vdf_to_json::VdfToJson,
};

mod commands;

fn main() -> Result<()> {
    color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install()?;

    setup_logging();

    match Cli::parse().command {
        Commands::Version(read_version) => read_version.run(),
        Commands::Locate(locate) => locate.run(),
        Commands::Compare(compare) => compare.run(),
        Commands::VdfToJson(vdf_to_json) => vdf_to_json.run(),
        Commands::Complete(complete) => complete.run(),
    }
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(cfg!(debug_assertions))
                .without_time(),
        )
        .with(
            filter::Targets::new()
                .with_default(LevelFilter::INFO)
                .with_target(env!("CARGO_CRATE_NAME"), Level::TRACE),
        )
        .init();
}

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
struct Cli {
    #[arg(short = 'v', short_alias = 'V', long, action = clap::builder::ArgAction::Version)]
    version: (),
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Version(ReadVersion),
    Locate(Locate),
    Compare(Compare),
    #[command(name = "vdf2json")]
    VdfToJson(VdfToJson),
    Complete(Complete),
}
