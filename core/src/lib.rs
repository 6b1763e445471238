//! Presence scanning for Linksys access points.
//!
//! The access point has no API; its administrative web interface is scraped instead:
//!
//! 1. **[`gateway`]** logs in through `login.cgi` and fetches the per-radio status pages.
//! 2. **[`parser`]** pulls the client identifiers out of the status table markup.
//! 3. **[`scanner`]** ties both together behind the [`DeviceScanner`] contract and keeps
//!    the result of the latest scan.
//!
//! [`DeviceScanner`]: apwatch_common::scanning::DeviceScanner

pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod parser;
pub mod scanner;

pub use error::{ConnectionError, GatewayError};
pub use scanner::{get_scanner, AccessPointScanner};
