use std::{collections::HashMap, time::Duration};

use serde_derive::Deserialize;

use super::schedule::TimeSchedule;

// When changing anything here, make sure to add
// #[serde(alias = "ihavenounderscores")]
// where needed, so it can be read from the ENV vars.
// Defaults of such fields go in a serde default, not in the loader: a
// loader default under the alias plus the field name from a file is a
// duplicate field.

#[derive(Debug, Deserialize)]
pub struct Mqtt {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub secure: bool,
    #[serde(alias = "ignoretlserrors", default)]
    pub ignore_tls_errors: bool,
    pub username: String,
    pub password: String,
    #[serde(alias = "clientid", default = "default_client_id")]
    pub client_id: String,
    #[serde(alias = "roottopic", default = "default_root_topic")]
    pub root_topic: String,
    pub retain: bool,
}

#[derive(Debug, Deserialize)]
pub struct Printer {
    pub uris: Vec<String>,
    #[serde(alias = "ignoretlserrors", default = "default_true")]
    pub ignore_tls_errors: bool,
    pub username: String,
    pub password: String,
    #[serde(alias = "requesttimeout", with = "humantime_serde", default = "default_request_timeout")]
    pub request_timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct Poll {
    pub schedule: TimeSchedule,
    #[serde(alias = "maxretries", default = "default_max_retries")]
    pub max_retries: usize,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub mqtt: Mqtt,
    pub printer: Printer,
    pub poll: Poll,
    /// Status message overrides, keyed by status key (e.g. `jam`).
    #[serde(default)]
    pub messages: HashMap<String, String>,
    #[serde(alias = "sentrydsn", default)]
    pub sentry_dsn: Option<String>,
}

fn default_client_id() -> String {
    "printer-info".to_owned()
}

fn default_root_topic() -> String {
    "printer-info".to_owned()
}

fn default_true() -> bool {
    true
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_max_retries() -> usize {
    3
}
