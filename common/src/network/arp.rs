//! # Neighbor Table Parsing
//!
//! Turns the text printed by `arp -a` into [`ArpEntry`] values.
//!
//! Two line shapes are recognised:
//! * **Windows**: `192.168.1.1          aa-bb-cc-dd-ee-ff     dynamic`
//! * **BSD / Linux**: `? (192.168.1.1) at aa:bb:cc:dd:ee:ff [ether] on eth0`,
//!   optionally with flag words (`PERM`, `PUB`, `M`) before `on`
//!
//! Every other line (interface banners, column headers, blank lines,
//! incomplete entries) is skipped.

use std::net::Ipv4Addr;
use std::sync::OnceLock;

use regex::Regex;

use crate::network::mac::MacAddress;

static TABLE_LINE: OnceLock<Regex> = OnceLock::new();
static BSD_LINE: OnceLock<Regex> = OnceLock::new();

fn table_line() -> &'static Regex {
    TABLE_LINE.get_or_init(|| {
        Regex::new(r"^\s*([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)\s+([0-9A-Fa-f:-]+)\s+([\w ]*\w)\s*$")
            .expect("neighbor table pattern is valid")
    })
}

fn bsd_line() -> &'static Regex {
    BSD_LINE.get_or_init(|| {
        Regex::new(r"^\s*\S+\s+\(([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)\)\s+at\s+([0-9A-Fa-f:-]+)(?:\s+\[\w+\])?(?:\s+[A-Z]+)*\s+on\s+(\S+)")
            .expect("bsd neighbor table pattern is valid")
    })
}

/// One IP to MAC pairing from the host's neighbor cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArpEntry {
    pub ip: Ipv4Addr,
    pub mac: MacAddress,
    /// Entry type (`dynamic`, `static`) or interface name, depending on platform.
    pub label: String,
}

/// Extracts every well-formed entry from a neighbor table dump, in the
/// order they appear. Duplicates are kept.
pub fn parse_neighbor_table(text: &str) -> Vec<ArpEntry> {
    text.lines().filter_map(parse_line).collect()
}

/// Parses a single line of `arp -a` output.
pub fn parse_line(line: &str) -> Option<ArpEntry> {
    let caps = table_line()
        .captures(line)
        .or_else(|| bsd_line().captures(line))?;

    let ip: Ipv4Addr = caps[1].parse().ok()?;

    Some(ArpEntry {
        ip,
        mac: MacAddress::new(&caps[2]),
        label: caps[3].to_string(),
    })
}
