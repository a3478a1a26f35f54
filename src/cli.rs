use std::path::PathBuf;

use clap::{ArgAction, Parser};
use vs_config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "vshop", version, about = "Fetch your VALORANT storefront using a session cookie", long_about = None)]
pub struct Cli {
    /// Route all traffic through this proxy (overrides PROXY)
    #[arg(long)]
    pub proxy: Option<String>,

    /// Client version header to send (overrides CLIENT_VERSION)
    #[arg(long)]
    pub client_version: Option<String>,

    /// Backend shard such as ap, na, eu, kr (overrides SHARD)
    #[arg(long)]
    pub shard: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with a distinct nonzero code for each failure class
    #[arg(long)]
    pub strict_exit: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            proxy: self.proxy.clone(),
            client_version: self.client_version.clone(),
            shard: self.shard.clone(),
        }
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
