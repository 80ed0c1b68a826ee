/// Default vendor lookup endpoint. The normalized MAC and
/// `/company/name` are appended per request.
pub const DEFAULT_API_URL: &str = "https://api.maclookup.app/v2/macs";

pub struct Config {
    /// Base URL of the vendor lookup service.
    pub api_url: String,
    /// Number of lookups allowed in flight during a table run.
    ///
    /// `1` keeps the run sequential and prints each line as it resolves.
    pub jobs: usize,
    /// Log verbosity reduction, one step per `-q`.
    pub quiet: u8,
}
