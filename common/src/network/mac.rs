use std::fmt;

/// Separators accepted between the octets of a MAC address.
const SEPARATORS: [char; 2] = [':', '-'];

/// Canonicalizes a MAC address string into a vendor lookup key.
///
/// Strips every `:` and `-` and lowercases what is left. No length or
/// hex-digit validation is done, so malformed input keeps its shape.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// A MAC address as typed by the user or read from the neighbor table,
/// together with its normalized lookup key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MacAddress {
    raw: String,
    normalized: String,
}

impl MacAddress {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw: String = raw.into();
        let normalized: String = normalize(&raw);
        Self { raw, normalized }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

impl From<&str> for MacAddress {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Shows the raw form, which is what the user recognises.
impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
