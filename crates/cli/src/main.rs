use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;

/// pipl - Generate plugin property list resources
#[derive(Parser)]
#[command(name = "pipl")]
#[command(about = "Generate binary PIPL resources for native host plugins")]
#[command(version)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the binary PIPL for the running host platform
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Path of the PIPL file to write
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Show the properties that would be written, as JSON
    Manifest {
        #[command(flatten)]
        input: InputArgs,

        /// Write the manifest to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the supported properties
    Catalog,
    /// Print the JSON schema of the plugin record list
    Schema,
}

/// Where plugin records are read from
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// JSON list of records, e.g. '[{"name": "My Plugin", "entry_point": "PluginMain"}]'
    #[arg(short, long)]
    input: Option<String>,

    /// File containing the JSON list of records
    #[arg(long)]
    input_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build { input, output } => commands::build::execute(&input, &output),
        Commands::Manifest { input, output } => {
            commands::manifest::execute(&input, output.as_deref())
        }
        Commands::Catalog => commands::catalog::execute(),
        Commands::Schema => commands::schema::execute(),
    }
}
