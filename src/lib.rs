//! Printer information for IPP printers: status lines derived from the
//! printer state and its block reasons, ready media and supply levels.

pub mod config;
pub mod info;
pub mod ipp_client;
pub mod media;
pub mod monitor;
pub mod mqtt_client;
pub mod status;
pub mod supply;
