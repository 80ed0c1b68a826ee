mod commands;
mod terminal;

use commands::{CommandLine, lookup};
use ouilookup_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        api_url: commands.api_url,
        jobs: usize::from(commands.jobs),
        quiet: commands.quiet,
    };

    logging::init_logging(cfg.quiet);

    if let Some(mac) = commands.mac.as_deref() {
        lookup::mac(mac, &cfg)?;
    }
    if commands.arp {
        lookup::arp(&cfg)?;
    }

    Ok(())
}
