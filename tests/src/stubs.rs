use std::collections::HashMap;
use std::sync::Mutex;

use ouilookup_common::system::{
    HttpGet, HttpResponse, NeighborTableSource, TableError, TransportError,
};

pub const BASE_URL: &str = "http://vendors.test/v2/macs";

pub fn url_for(key: &str) -> String {
    format!("{BASE_URL}/{key}/company/name")
}

/// Serves canned responses keyed by normalized MAC. Unknown keys get a
/// connection error, like an unreachable host.
#[derive(Default)]
pub struct StubHttp {
    responses: HashMap<String, HttpResponse>,
    calls: Mutex<Vec<String>>,
}

impl StubHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, key: &str, status: u16, body: &str) -> Self {
        self.responses.insert(url_for(key), HttpResponse::new(status, body));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HttpGet for StubHttp {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::new(url, "error sending request"))
    }
}

impl HttpGet for &StubHttp {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

pub enum CannedTable {
    Text(&'static str),
    Bytes(&'static [u8]),
    Fails,
}

impl NeighborTableSource for CannedTable {
    fn dump(&self) -> Result<Vec<u8>, TableError> {
        match self {
            CannedTable::Text(text) => Ok(text.as_bytes().to_vec()),
            CannedTable::Bytes(bytes) => Ok(bytes.to_vec()),
            CannedTable::Fails => Err(TableError::Spawn {
                command: "arp -a".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
            }),
        }
    }
}
