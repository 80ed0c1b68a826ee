use anyhow::Context;
use ouilookup_common::system::{HttpGet, HttpResponse, TransportError};
use reqwest::blocking::Client;

const USER_AGENT: &str = concat!("ouilookup/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client backed by `reqwest`, using its default timeouts.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> anyhow::Result<Self> {
        let client: Client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpGet for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError::new(url, e))?;
        let status: u16 = response.status().as_u16();
        let body: String = response.text().map_err(|e| TransportError::new(url, e))?;
        Ok(HttpResponse { status, body })
    }
}
