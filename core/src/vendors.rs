use ouilookup_common::network::mac::MacAddress;
use ouilookup_common::system::{HttpGet, HttpResponse};
use ouilookup_common::vendors::{LookupError, VendorLookup, VendorRepository};
use tracing::debug;

/// Resolves vendors through the maclookup.app company name endpoint.
pub struct MacLookupRepo<C> {
    client: C,
    base_url: String,
}

impl<C: HttpGet> MacLookupRepo<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url_for(&self, mac: &MacAddress) -> String {
        format!("{}/{}/company/name", self.base_url, mac.normalized())
    }
}

impl<C: HttpGet> VendorRepository for MacLookupRepo<C> {
    fn lookup(&self, mac: &MacAddress) -> Result<VendorLookup, LookupError> {
        let url: String = self.url_for(mac);
        debug!("GET {url}");

        let response: HttpResponse = self.client.get(&url)?;
        if !response.is_ok() {
            return Err(LookupError::Status {
                code: response.status,
                body: response.body.trim().to_string(),
            });
        }

        Ok(VendorLookup::from_body(&response.body))
    }
}
