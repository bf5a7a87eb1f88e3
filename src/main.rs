//! chirpbulk - bulk-register ChirpStack devices from a CSV file
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use chirpbulk_app::config::{self, Settings};
use chirpbulk_core::prelude::*;
use clap::Parser;

/// Terminal wizard that creates one ChirpStack device per CSV row
#[derive(Parser, Debug)]
#[command(name = "chirpbulk", version)]
#[command(about = "Bulk-register ChirpStack devices from a CSV file", long_about = None)]
struct Args {
    /// ChirpStack gRPC address as host:port (plaintext)
    #[arg(long, value_name = "ADDR")]
    server: Option<String>,

    /// Directory the CSV file browser opens in
    #[arg(long, value_name = "PATH")]
    dir: Option<PathBuf>,
}

impl Args {
    /// Command-line flags win over config.toml
    fn apply(self, settings: &mut Settings) {
        if let Some(server) = self.server {
            settings.server.address = server;
        }
        if let Some(dir) = self.dir {
            settings.import.start_dir = Some(dir);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    chirpbulk_core::logging::init()?;

    let mut settings = config::load_settings();
    args.apply(&mut settings);

    let result = chirpbulk_tui::run(settings).await;
    if let Err(e) = &result {
        error!("Exited with error: {}", e);
    }
    result
}
