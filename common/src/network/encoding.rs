//! Decoding of text captured from console programs.

use encoding_rs::Encoding;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("output is not valid {encoding} ({len} bytes)")]
pub struct DecodeError {
    pub encoding: &'static str,
    pub len: usize,
}

/// The codepage console programs write in by default on this platform.
#[cfg(windows)]
pub fn console_encoding() -> &'static Encoding {
    encoding_rs::WINDOWS_1252
}

/// The codepage console programs write in by default on this platform.
#[cfg(not(windows))]
pub fn console_encoding() -> &'static Encoding {
    encoding_rs::UTF_8
}

/// Decodes `bytes` strictly: any malformed sequence fails the whole buffer
/// instead of being replaced.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Result<String, DecodeError> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or(DecodeError {
            encoding: encoding.name(),
            len: bytes.len(),
        })
}
