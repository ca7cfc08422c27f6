//! The printer information screen as data: what the printer is called,
//! which status lines to show, which media is loaded and how full every
//! supply is.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;

use crate::{
    ipp_client::models::PrinterCapabilities,
    media::media_ready_names,
    status::{resolve, PrinterStatusSnapshot, StatusKeyMap},
    supply::{build_markers, MarkerInfo, SupplyLevel},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyInformation {
    pub marker: MarkerInfo,
    pub level: SupplyLevel,
}

#[derive(Debug, Clone)]
pub struct PrinterInformation {
    pub uri: String,
    pub name: Option<String>,
    pub make_and_model: Option<String>,
    pub status: PrinterStatusSnapshot,
    /// Resolved status messages. Empty means the status is hidden.
    pub status_lines: IndexSet<String>,
    pub media_ready: Vec<String>,
    pub supplies: Vec<SupplyInformation>,
    /// Only the URI; the icon itself is never downloaded.
    pub icon_uri: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl PrinterInformation {
    /// Combines the printer's capabilities (if it could be queried) with
    /// its latest status.
    pub fn build(
        uri: &str,
        capabilities: Option<&PrinterCapabilities>,
        status: PrinterStatusSnapshot,
        key_map: &StatusKeyMap,
    ) -> Self {
        let status_lines = resolve(&status.state, &status.blocked_reasons, key_map);

        let mut info = PrinterInformation {
            uri: uri.to_owned(),
            name: None,
            make_and_model: None,
            status,
            status_lines,
            media_ready: Vec::new(),
            supplies: Vec::new(),
            icon_uri: None,
            updated_at: Utc::now(),
        };

        if let Some(caps) = capabilities {
            info.name = Some(caps.name.clone()).filter(|name| !name.is_empty());
            info.make_and_model = Some(caps.make_and_model.clone()).filter(|model| !model.is_empty());
            info.media_ready = media_ready_names(&caps.media_ready);
            info.supplies = build_markers(&caps.markers)
                .into_iter()
                .map(|marker| SupplyInformation { level: marker.supply_level(), marker })
                .collect();
            info.icon_uri = caps.icon_uris.last().cloned();
        }

        info
    }

    /// Information for a printer that could not be reached.
    pub fn unavailable(uri: &str, key_map: &StatusKeyMap) -> Self {
        Self::build(uri, None, PrinterStatusSnapshot::unable_to_connect(), key_map)
    }

    pub fn show_status(&self) -> bool {
        !self.status_lines.is_empty()
    }

    pub fn show_media_ready(&self) -> bool {
        !self.media_ready.is_empty()
    }
}
