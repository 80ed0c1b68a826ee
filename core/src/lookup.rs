//! # Lookup Runs
//!
//! Drives the two ways of using the tool:
//! * **Single**: resolve one MAC address given on the command line.
//! * **Table**: resolve every MAC address in the host's neighbor table.
//!
//! Results are written to the provided sink one line at a time. Failed
//! lookups are logged and shown as a fallback value; they never stop a run.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use ouilookup_common::network::arp::ArpEntry;
use ouilookup_common::network::mac::MacAddress;
use ouilookup_common::system::NeighborTableSource;
use ouilookup_common::vendors::{LookupError, VendorLookup, VendorRepository};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{error, info};

use crate::arp::ArpTableReader;

pub const NOT_FOUND: &str = "Not found";
pub const UNKNOWN: &str = "Unknown";
pub const TABLE_HEADER: &str = "MAC/Vendor:";
pub const EMPTY_TABLE: &str = "No entries found in the ARP table, or it could not be read.";

/// A finished lookup of one MAC address.
#[derive(Debug)]
pub struct Resolution {
    pub mac: MacAddress,
    pub outcome: Result<VendorLookup, LookupError>,
    pub elapsed: Duration,
}

impl Resolution {
    /// The vendor name, or `fallback` when it is unknown or the lookup failed.
    pub fn vendor_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match &self.outcome {
            Ok(lookup) => lookup.name().unwrap_or(fallback),
            Err(_) => fallback,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Ok(VendorLookup::Found(_)))
    }
}

/// Looks up `mac` and measures how long the round trip took.
pub fn resolve_timed<R>(repo: &R, mac: MacAddress) -> Resolution
where
    R: VendorRepository + ?Sized,
{
    let start: Instant = Instant::now();
    let outcome = repo.lookup(&mac);
    let elapsed: Duration = start.elapsed();

    if let Err(e) = &outcome {
        error!("Lookup for {mac} failed: {e}");
    }

    Resolution {
        mac,
        outcome,
        elapsed,
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TableSummary {
    pub entries: usize,
    pub identified: usize,
}

pub struct LookupRunner<R, S> {
    repo: R,
    reader: ArpTableReader<S>,
    jobs: usize,
}

impl<R, S> LookupRunner<R, S>
where
    R: VendorRepository + Sync,
    S: NeighborTableSource,
{
    pub fn new(repo: R, reader: ArpTableReader<S>) -> Self {
        Self {
            repo,
            reader,
            jobs: 1,
        }
    }

    /// Sets how many table lookups may run at once. Values below 2 keep
    /// the run sequential.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Resolves a single MAC address and prints it with its response time.
    pub fn single<W: Write>(&self, raw_mac: &str, out: &mut W) -> io::Result<Resolution> {
        let resolution: Resolution = resolve_timed(&self.repo, MacAddress::new(raw_mac));

        writeln!(out, "MAC address   : {}", resolution.mac)?;
        writeln!(out, "Vendor        : {}", resolution.vendor_or(NOT_FOUND))?;
        writeln!(out, "Response time : {}ms", resolution.elapsed.as_millis())?;
        out.flush()?;

        Ok(resolution)
    }

    /// Resolves every entry of the neighbor table, printing `<mac> / <vendor>`
    /// per entry in table order.
    pub fn table<W: Write>(&self, out: &mut W) -> anyhow::Result<TableSummary> {
        writeln!(out, "{TABLE_HEADER}")?;
        out.flush()?;

        let entries: Vec<ArpEntry> = self.reader.read_table();
        if entries.is_empty() {
            writeln!(out, "{EMPTY_TABLE}")?;
            out.flush()?;
            return Ok(TableSummary::default());
        }

        info!("Resolving {} neighbor table entries", entries.len());

        let mut summary = TableSummary {
            entries: entries.len(),
            identified: 0,
        };

        if self.jobs > 1 {
            for resolution in self.resolve_parallel(&entries)? {
                summary.identified += usize::from(resolution.is_found());
                write_table_line(out, &resolution)?;
            }
        } else {
            for entry in entries {
                let resolution: Resolution = resolve_timed(&self.repo, entry.mac);
                summary.identified += usize::from(resolution.is_found());
                write_table_line(out, &resolution)?;
            }
        }

        Ok(summary)
    }

    /// Runs the lookups on a bounded pool. Results come back in entry order.
    fn resolve_parallel(&self, entries: &[ArpEntry]) -> anyhow::Result<Vec<Resolution>> {
        let pool: ThreadPool = ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .context("failed to start lookup workers")?;

        let repo: &R = &self.repo;
        let resolutions: Vec<Resolution> = pool.install(|| {
            entries
                .par_iter()
                .map(|entry| resolve_timed(repo, entry.mac.clone()))
                .collect()
        });

        Ok(resolutions)
    }
}

fn write_table_line<W: Write>(out: &mut W, resolution: &Resolution) -> io::Result<()> {
    writeln!(out, "{} / {}", resolution.mac, resolution.vendor_or(UNKNOWN))?;
    out.flush()
}
