use encoding_rs::Encoding;
use ouilookup_common::network::arp::{self, ArpEntry};
use ouilookup_common::network::encoding;
use ouilookup_common::system::{NeighborTableSource, TableError};
use tracing::{debug, error};

/// Reads and parses the host's neighbor table through a [`NeighborTableSource`].
pub struct ArpTableReader<S> {
    source: S,
    encoding: &'static Encoding,
}

impl<S: NeighborTableSource> ArpTableReader<S> {
    /// Decodes the dump with the platform's console codepage.
    pub fn new(source: S) -> Self {
        Self::with_encoding(source, encoding::console_encoding())
    }

    pub fn with_encoding(source: S, encoding: &'static Encoding) -> Self {
        Self { source, encoding }
    }

    /// Returns every entry in the table, in dump order.
    ///
    /// Failing to run the dump or to decode its output is logged and
    /// yields an empty table, never a partial one.
    pub fn read_table(&self) -> Vec<ArpEntry> {
        match self.try_read_table() {
            Ok(entries) => entries,
            Err(e) => {
                error!("Could not read the ARP table: {e}");
                Vec::new()
            }
        }
    }

    pub fn try_read_table(&self) -> Result<Vec<ArpEntry>, TableError> {
        let bytes: Vec<u8> = self.source.dump()?;
        let text: String = encoding::decode(&bytes, self.encoding)?;
        let entries: Vec<ArpEntry> = arp::parse_neighbor_table(&text);
        debug!("Parsed {} entries from {} bytes", entries.len(), bytes.len());
        Ok(entries)
    }
}
