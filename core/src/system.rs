use std::process::{Command, Output};

use ouilookup_common::system::{NeighborTableSource, TableError};

const ARP_PROGRAM: &str = "arp";
const ARP_LIST_ALL: &str = "-a";

/// Dumps the neighbor table by running `arp -a`.
pub struct ArpCommand;

impl ArpCommand {
    fn command_line() -> String {
        format!("{ARP_PROGRAM} {ARP_LIST_ALL}")
    }
}

impl NeighborTableSource for ArpCommand {
    fn dump(&self) -> Result<Vec<u8>, TableError> {
        let output: Output = Command::new(ARP_PROGRAM)
            .arg(ARP_LIST_ALL)
            .output()
            .map_err(|source| TableError::Spawn {
                command: Self::command_line(),
                source,
            })?;

        if !output.status.success() {
            return Err(TableError::Exit {
                command: Self::command_line(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}
