pub mod arp;
pub mod http;
pub mod lookup;
pub mod system;
pub mod vendors;
