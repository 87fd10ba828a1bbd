//! VAS Skill Host - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `vas-server` | Serve `/api/messages` and `/api/skill/messages` |
//! | `vas-server --check` | Validate configuration and provider selection, then exit |

use clap::Parser;
use vas_server::run;

/// Command line interface for the VAS skill host
#[derive(Parser, Debug)]
#[command(name = "vas-server")]
#[command(about = "Virtual assistant skill host - bot message routing and geospatial provider selection")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Load configuration, select the geospatial provider and exit
    #[arg(long)]
    pub check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.check).await
}
