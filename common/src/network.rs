pub mod arp;
pub mod encoding;
pub mod mac;
