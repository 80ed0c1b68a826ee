use thiserror::Error;

use crate::network::mac::MacAddress;
use crate::system::TransportError;

/// Literal body the lookup service answers with for an unknown prefix.
const NOT_FOUND_BODY: &str = "not found";

/// Outcome of a vendor lookup that reached the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VendorLookup {
    Found(String),
    NotFound,
}

impl VendorLookup {
    /// Classifies a successful response body.
    ///
    /// The service signals an unknown prefix with the text `not found`
    /// (any case). An empty body is treated the same way.
    pub fn from_body(body: &str) -> Self {
        let body: &str = body.trim();
        if body.is_empty() || body.eq_ignore_ascii_case(NOT_FOUND_BODY) {
            VendorLookup::NotFound
        } else {
            VendorLookup::Found(body.to_string())
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            VendorLookup::Found(name) => Some(name.as_str()),
            VendorLookup::NotFound => None,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// Connection refused, DNS failure, timeout and friends.
    #[error("connection error: {0}")]
    Transport(#[from] TransportError),
    #[error("error: {code} - {body}")]
    Status { code: u16, body: String },
}

/// Defines the contract for resolving device manufacturers from MAC addresses.
pub trait VendorRepository {
    /// Retrieves the vendor for a given MAC address.
    ///
    /// # Returns
    /// * `Ok(VendorLookup::Found(_))` - The name of the vendor.
    /// * `Ok(VendorLookup::NotFound)` - If the OUI is unknown to the service.
    /// * `Err(_)` - If the service could not be asked or answered with an error.
    fn lookup(&self, mac: &MacAddress) -> Result<VendorLookup, LookupError>;
}
