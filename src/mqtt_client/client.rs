use std::{sync::Arc, time::Duration};

use dashmap::DashMap;
use log::{debug, info, warn};
use rumqttc::{tokio_rustls::rustls::ClientConfig, AsyncClient, ClientError, MqttOptions, QoS};
use snafu::{ResultExt, Snafu};

use crate::config::models::Mqtt;

use super::fun_with_tls::{get_system_certs, NoopServerCertVerifier};

/// Publishes queued while the connection is down. Beyond this, publishing
/// fails instead of waiting for the broker.
const REQUEST_QUEUE_CAPACITY: usize = 10;

pub struct MqttClient {
    client: AsyncClient,
    retain: bool,
    // Fingerprint of the last payload published per topic.
    published: DashMap<String, Vec<u8>>,
}

impl MqttClient {
    /// Connects in the background. Must be called from within a tokio runtime.
    pub fn new(mqtt_settings: &Mqtt) -> Self {
        let mqtt_options = MqttOptions::new(mqtt_settings.client_id.to_owned(), mqtt_settings.host.to_owned(), mqtt_settings.port)
            .set_credentials(mqtt_settings.username.to_owned(), mqtt_settings.password.to_owned())
            .set_transport(match mqtt_settings.secure {
                true => {
                    let config: ClientConfig = match mqtt_settings.ignore_tls_errors {
                        // TLS without certificate verification.
                        true => ClientConfig::builder().dangerous().with_custom_certificate_verifier(Arc::new(NoopServerCertVerifier {})).with_no_client_auth(),
                        // TLS with certificate verification.
                        false => ClientConfig::builder().with_root_certificates(get_system_certs().clone()).with_no_client_auth(),
                    };
                    rumqttc::Transport::tls_with_config(rumqttc::TlsConfiguration::Rustls(Arc::new(config)))
                }
                // No TLS.
                false => rumqttc::Transport::tcp(),
            })
            .set_keep_alive(Duration::from_secs(10)).to_owned();

        let (client, mut event_loop) = AsyncClient::new(mqtt_options, REQUEST_QUEUE_CAPACITY);

        tokio::spawn(async move {
            loop {
                match event_loop.poll().await {
                    Ok(notification) => debug!("MQTT event: {notification:?}"),
                    Err(e) => {
                        warn!("MQTT connection error: {e}");
                        tokio::time::sleep(Duration::from_secs(5)).await;
                    }
                }
            }
        });

        Self { client, retain: mqtt_settings.retain, published: DashMap::new() }
    }

    /// Queues a publish without waiting. Fails when the request queue is
    /// full, e.g. while the broker is unreachable.
    pub fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), MqttClientError> {
        self.client
            .try_publish(topic, QoS::AtLeastOnce, self.retain, payload.to_vec())
            .inspect_err(|_| warn!("MQTT request queue is full or the broker is unreachable, dropping update for {topic}"))
            .context(PublishSnafu { topic })
    }

    /// Publishes unless `fingerprint` equals the one of the last payload
    /// sent to `topic`. Returns whether anything was sent. A failed publish
    /// is not remembered, so the next call tries again.
    pub fn publish_if_changed(&self, topic: &str, fingerprint: Vec<u8>, payload: &[u8]) -> Result<bool, MqttClientError> {
        if self.published.get(topic).is_some_and(|last| *last.value() == fingerprint) {
            debug!("Skipping unchanged payload for {topic}");
            return Ok(false);
        }
        self.publish(topic, payload)?;
        self.published.insert(topic.to_owned(), fingerprint);
        info!("Published: {topic}");
        Ok(true)
    }
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
pub enum MqttClientError {
    #[snafu(display("Could not publish to '{topic}'"))]
    Publish { topic: String, source: ClientError },
}
