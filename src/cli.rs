use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "diglib-ingest",
    version,
    about = "Prepare book catalog CSVs and Workbench job files for digital library ingest"
)]
pub struct Cli {
    /// Key=value file holding credentials and paths.
    #[arg(
        long,
        global = true,
        env = "DIGLIB_ENV_FILE",
        default_value = "variables.env"
    )]
    pub env_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate scans, expand books into pages and write the ingest CSV and YAML.
    Prepare(PrepareArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PrepareArgs {
    /// Catalog CSV, relative to the configured CSV_PATH.
    pub filename: PathBuf,

    #[arg(short = 'i', long, default_value = "tif")]
    pub image_type: String,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
