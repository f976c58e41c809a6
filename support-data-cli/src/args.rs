use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "support-data")]
#[command(about = "Render, redact and report diagnostic support snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with `[profile]` path lists and `[links]`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Add or override a link, as `ID=URL`.
    #[arg(long = "link", value_name = "ID=URL", value_parser = parse_link, global = true)]
    pub links: Vec<(String, String)>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Snapshot JSON file, or `-` for stdin.
    #[arg(long, short = 's', value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Scrub sensitive values and local file names.
    #[arg(long)]
    pub redact: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the rendered snapshot.
    Show {
        #[command(flatten)]
        input: SnapshotArgs,
    },

    /// Print report URLs carrying the rendered snapshot.
    Report {
        #[command(flatten)]
        input: SnapshotArgs,

        /// Only print this report link.
        #[arg(long)]
        id: Option<String>,
    },

    /// Open a link through the host.
    Open {
        #[command(flatten)]
        input: SnapshotArgs,

        id: String,
    },
}

fn parse_link(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((id, url)) if !id.is_empty() => Ok((id.to_owned(), url.to_owned())),
        _ => Err(format!("expected ID=URL, got {raw:?}")),
    }
}
