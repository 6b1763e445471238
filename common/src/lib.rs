//! Shared models and contracts for `apwatch`.
//!
//! * **[`config`]**: connection and display settings.
//! * **[`network`]**: the device model scraped from an access point.
//! * **[`scanning`]**: the scanner contract exposed to a presence orchestrator.

pub mod config;
pub mod network;
pub mod scanning;
