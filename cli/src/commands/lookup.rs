use std::io::{self, StdoutLock};
use std::time::{Duration, Instant};

use colored::*;
use ouilookup_common::config::Config;
use ouilookup_core::arp::ArpTableReader;
use ouilookup_core::http::ReqwestClient;
use ouilookup_core::lookup::{LookupRunner, TableSummary};
use ouilookup_core::system::ArpCommand;
use ouilookup_core::vendors::MacLookupRepo;
use tracing::{debug, info};

type Runner = LookupRunner<MacLookupRepo<ReqwestClient>, ArpCommand>;

fn build_runner(cfg: &Config) -> anyhow::Result<Runner> {
    debug!("Using vendor service at {}", cfg.api_url);
    let repo = MacLookupRepo::new(ReqwestClient::new()?, cfg.api_url.as_str());
    let reader = ArpTableReader::new(ArpCommand);
    Ok(LookupRunner::new(repo, reader).with_jobs(cfg.jobs))
}

pub fn mac(raw_mac: &str, cfg: &Config) -> anyhow::Result<()> {
    let runner: Runner = build_runner(cfg)?;
    let mut out: StdoutLock = io::stdout().lock();
    runner.single(raw_mac, &mut out)?;
    Ok(())
}

pub fn arp(cfg: &Config) -> anyhow::Result<()> {
    let runner: Runner = build_runner(cfg)?;

    let start_time: Instant = Instant::now();
    let summary: TableSummary = {
        let mut out: StdoutLock = io::stdout().lock();
        runner.table(&mut out)?
    };

    if summary.entries > 0 {
        print_summary(&summary, start_time.elapsed());
    }
    Ok(())
}

fn print_summary(summary: &TableSummary, total_time: Duration) {
    let identified: ColoredString = format!("{} of {}", summary.identified, summary.entries)
        .bold()
        .green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    info!("Lookup complete: {identified} devices identified in {total_time}");
}
