use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::info::{PrinterInformation, SupplyInformation};

// ////// //
// Status //
// ////// //

#[derive(Debug, Serialize, Deserialize)]
pub struct MqttPrinterInformation {
    #[serde(flatten)]
    pub printer: MqttPrinterStatus,
    pub updated_at: DateTime<Utc>,
    pub printer_info_version: String,
}

impl MqttPrinterInformation {
    /// Serialized printer status without the timestamp, to detect changes.
    pub fn fingerprint(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.printer)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MqttPrinterStatus {
    pub uri: String,
    pub is_reachable: bool,
    pub name: Option<String>,
    pub make_and_model: Option<String>,
    pub state: String,
    pub blocked_reasons: Vec<String>,
    /// Empty when no status should be shown.
    pub status: Vec<String>,
    pub media_ready: Vec<String>,
    pub supplies: Vec<MqttPrinterSupply>,
    pub icon_uri: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MqttPrinterSupply {
    #[serde(rename = "type")]
    pub marker_type: String,
    pub name: Option<String>,
    pub color: String,
    pub level: i32,
    pub high_level: i32,
    pub low_level: i32,
    /// Fill on a 0..=10000 scale.
    pub fill: i32,
    pub is_low: bool,
}

impl From<&PrinterInformation> for MqttPrinterInformation {
    fn from(info: &PrinterInformation) -> Self {
        MqttPrinterInformation {
            printer: MqttPrinterStatus::from(info),
            updated_at: info.updated_at,
            printer_info_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl From<&PrinterInformation> for MqttPrinterStatus {
    fn from(info: &PrinterInformation) -> Self {
        MqttPrinterStatus {
            uri: info.uri.clone(),
            is_reachable: info.status.is_reachable(),
            name: info.name.clone(),
            make_and_model: info.make_and_model.clone(),
            state: info.status.state.clone(),
            blocked_reasons: info.status.blocked_reasons.clone(),
            status: info.status_lines.iter().cloned().collect(),
            media_ready: info.media_ready.clone(),
            supplies: info.supplies.iter().map(MqttPrinterSupply::from).collect(),
            icon_uri: info.icon_uri.clone(),
        }
    }
}

impl From<&SupplyInformation> for MqttPrinterSupply {
    fn from(supply: &SupplyInformation) -> Self {
        MqttPrinterSupply {
            marker_type: supply.marker.marker_type.clone(),
            name: supply.marker.name.clone(),
            color: supply.marker.color.clone(),
            level: supply.marker.level,
            high_level: supply.marker.high_level,
            low_level: supply.marker.low_level,
            fill: supply.level.fill_per_myriad,
            is_low: supply.level.is_low,
        }
    }
}

/// Topic suffix for a printer: host and path of its URI, everything that
/// is not alphanumeric replaced by `_`.
pub fn printer_topic_id(uri: &str) -> String {
    let without_scheme = uri.split_once("://").map_or(uri, |(_, rest)| rest);
    let without_credentials = without_scheme.rsplit_once('@').map_or(without_scheme, |(_, rest)| rest);

    let id: String = without_credentials
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    id.trim_matches('_').to_string()
}
