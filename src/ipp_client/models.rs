use crate::{status::PrinterStatusSnapshot, supply::MarkerSupplies};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterCapabilities {
    pub name: String,
    pub make_and_model: String,
    pub icon_uris: Vec<String>,
    pub media_ready: Vec<String>,
    pub markers: MarkerSupplies,
}

/// Everything a single Get-Printer-Attributes response tells us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IppPrinterAttributes {
    pub capabilities: PrinterCapabilities,
    pub status: PrinterStatusSnapshot,
}
