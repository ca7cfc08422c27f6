use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use log::{error, warn};

use crate::{
    config::models::Printer,
    info::PrinterInformation,
    ipp_client::client::{IppClientError, PrinterEndpoint},
    status::StatusKeyMap,
};

/// Polls printers and turns their answers into [`PrinterInformation`].
pub struct PrinterMonitor {
    endpoints: Vec<PrinterEndpoint>,
    key_map: StatusKeyMap,
    max_retries: usize,
}

impl PrinterMonitor {
    pub fn new(printer_settings: &Printer, key_map: StatusKeyMap, max_retries: usize) -> Result<Self, IppClientError> {
        let endpoints = printer_settings
            .uris
            .iter()
            .map(|uri| PrinterEndpoint::new(printer_settings, uri))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { endpoints, key_map, max_retries })
    }

    pub fn endpoints(&self) -> &[PrinterEndpoint] {
        &self.endpoints
    }

    /// Queries one printer, retrying with backoff. A printer that still
    /// cannot be reached is reported as unable to connect.
    pub async fn refresh(&self, endpoint: &PrinterEndpoint) -> PrinterInformation {
        let backoff = ExponentialBuilder::default()
            .with_factor(4.0)
            .with_min_delay(Duration::from_millis(500))
            .with_max_times(self.max_retries);

        let result = (|| endpoint.get_printer_attributes())
            .retry(backoff)
            .notify(|e, delay| warn!("Querying {} failed, retrying in {:?}: {e}", endpoint.uri, delay))
            .await;

        match result {
            Ok(attributes) => {
                PrinterInformation::build(&endpoint.uri, Some(&attributes.capabilities), attributes.status, &self.key_map)
            }
            Err(e) => {
                error!("Giving up on {}: {e}", endpoint.uri);
                PrinterInformation::unavailable(&endpoint.uri, &self.key_map)
            }
        }
    }

    pub async fn refresh_all(&self) -> Vec<PrinterInformation> {
        let mut infos = Vec::with_capacity(self.endpoints.len());
        for endpoint in &self.endpoints {
            infos.push(self.refresh(endpoint).await);
        }
        infos
    }
}
