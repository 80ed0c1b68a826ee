pub mod lookup;

use clap::{ArgAction, ArgGroup, Parser};
use ouilookup_common::config::DEFAULT_API_URL;

#[derive(Parser)]
#[command(name = "ouilookup", version)]
#[command(about = "Find the manufacturer of a MAC address, or of every device in the ARP table.")]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(true)
        .args(["mac", "arp"])
))]
pub struct CommandLine {
    /// MAC address to look up, e.g. AA:BB:CC:DD:EE:FF
    #[arg(short, long, value_name = "MAC")]
    pub mac: Option<String>,
    /// Look up every device in the host's ARP table
    #[arg(short, long)]
    pub arp: bool,
    /// Lookups to run at once in ARP mode
    #[arg(short, long, value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,
    /// Base URL of the vendor lookup service
    #[arg(long, value_name = "URL", env = "OUILOOKUP_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
    /// Print less diagnostic output (repeat for less)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
