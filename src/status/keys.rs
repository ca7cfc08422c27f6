use std::{collections::HashMap, fmt, str::FromStr};

use indexmap::IndexMap;
use log::warn;
use snafu::Snafu;

// ////////// //
// Status key //
// ////////// //

/// Every printer state and block reason that has a human readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKey {
    // Block reasons
    DeviceOffline,
    DeviceBusy,
    OutOfPaper,
    OutOfInk,
    OutOfToner,
    Jammed,
    DoorOpen,
    ServiceRequest,
    LowOnInk,
    ReallyLowOnInk,
    LowOnToner,
    SpoolAreaFull,
    BadCertificate,

    // Printer states
    Idle,
    Running,
    UnableToConnect,
    Blocked,
}

impl StatusKey {
    pub const BLOCK_REASONS: [StatusKey; 13] = [
        StatusKey::DeviceOffline,
        StatusKey::DeviceBusy,
        StatusKey::OutOfPaper,
        StatusKey::OutOfInk,
        StatusKey::OutOfToner,
        StatusKey::Jammed,
        StatusKey::DoorOpen,
        StatusKey::ServiceRequest,
        StatusKey::LowOnInk,
        StatusKey::ReallyLowOnInk,
        StatusKey::LowOnToner,
        StatusKey::SpoolAreaFull,
        StatusKey::BadCertificate,
    ];

    pub const PRINTER_STATES: [StatusKey; 4] = [
        StatusKey::Idle,
        StatusKey::Running,
        StatusKey::UnableToConnect,
        StatusKey::Blocked,
    ];

    /// The key as it appears in status snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKey::DeviceOffline => "device-offline",
            StatusKey::DeviceBusy => "device-busy",
            StatusKey::OutOfPaper => "input-media-supply-empty",
            StatusKey::OutOfInk => "marker-ink-empty",
            StatusKey::OutOfToner => "marker-toner-empty",
            StatusKey::Jammed => "jam",
            StatusKey::DoorOpen => "opened",
            StatusKey::ServiceRequest => "service-request",
            StatusKey::LowOnInk => "marker-ink-almost-empty",
            StatusKey::ReallyLowOnInk => "marker-ink-really-low",
            StatusKey::LowOnToner => "marker-toner-almost-empty",
            StatusKey::SpoolAreaFull => "spool-area-full",
            StatusKey::BadCertificate => "bad-certificate",
            StatusKey::Idle => "idle",
            StatusKey::Running => "running",
            StatusKey::UnableToConnect => "unable-to-connect",
            StatusKey::Blocked => "blocked",
        }
    }

    fn default_message(&self) -> &'static str {
        match self {
            StatusKey::DeviceOffline => "Printer offline",
            StatusKey::DeviceBusy => "Printer busy",
            StatusKey::OutOfPaper => "Out of paper",
            StatusKey::OutOfInk => "Out of ink",
            StatusKey::OutOfToner => "Out of toner",
            StatusKey::Jammed => "Paper jam",
            StatusKey::DoorOpen => "Door open",
            StatusKey::ServiceRequest => "Check printer",
            StatusKey::LowOnInk => "Low on ink",
            StatusKey::ReallyLowOnInk => "Low on ink",
            StatusKey::LowOnToner => "Low on toner",
            StatusKey::SpoolAreaFull => "Spool area full",
            StatusKey::BadCertificate => "Bad certificate",
            StatusKey::Idle => "Ready",
            StatusKey::Running => "Printing",
            StatusKey::UnableToConnect => "Offline",
            StatusKey::Blocked => "Check printer",
        }
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusKey {
    type Err = UnknownStatusKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::BLOCK_REASONS
            .iter()
            .chain(Self::PRINTER_STATES.iter())
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownStatusKeyError { key: s.to_owned() })
    }
}

// ////////////// //
// Status key map //
// ////////////// //

/// Ordered lookup from [`StatusKey`] to the message shown for it.
///
/// Built once with [`StatusKeyMapBuilder`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct StatusKeyMap {
    messages: IndexMap<StatusKey, String>,
}

impl StatusKeyMap {
    pub fn builder() -> StatusKeyMapBuilder {
        StatusKeyMapBuilder::default()
    }

    pub fn get(&self, key: StatusKey) -> Option<&str> {
        self.messages.get(&key).map(String::as_str)
    }

    /// Looks up a raw snapshot key. Keys that are unknown or not part of
    /// this map resolve to `None`.
    pub fn lookup(&self, raw_key: &str) -> Option<&str> {
        raw_key.parse::<StatusKey>().ok().and_then(|key| self.get(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = StatusKey> + '_ {
        self.messages.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for StatusKeyMap {
    fn default() -> Self {
        StatusKeyMap::builder().with_block_reasons().with_printer_states().build()
    }
}

#[derive(Debug, Default)]
pub struct StatusKeyMapBuilder {
    messages: IndexMap<StatusKey, String>,
}

impl StatusKeyMapBuilder {
    /// Appends the catalog of known block reasons.
    pub fn with_block_reasons(self) -> Self {
        StatusKey::BLOCK_REASONS.iter().fold(self, |builder, key| builder.message(*key, key.default_message()))
    }

    /// Appends idle, running, unable-to-connect and blocked.
    pub fn with_printer_states(self) -> Self {
        StatusKey::PRINTER_STATES.iter().fold(self, |builder, key| builder.message(*key, key.default_message()))
    }

    /// Sets the message for `key`. An existing key keeps its position.
    pub fn message(mut self, key: StatusKey, message: impl Into<String>) -> Self {
        self.messages.insert(key, message.into());
        self
    }

    /// Applies message overrides keyed by their snapshot key (e.g. `"jam"`).
    /// Unknown keys are logged and skipped.
    pub fn overrides(self, overrides: &HashMap<String, String>) -> Self {
        overrides.iter().fold(self, |builder, (raw_key, message)| match raw_key.parse::<StatusKey>() {
            Ok(key) => builder.message(key, message.as_str()),
            Err(e) => {
                warn!("Ignoring message override: {e}");
                builder
            }
        })
    }

    pub fn build(self) -> StatusKeyMap {
        StatusKeyMap { messages: self.messages }
    }
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
#[snafu(display("Unknown status key '{key}'"))]
pub struct UnknownStatusKeyError {
    key: String,
}
