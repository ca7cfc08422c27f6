use super::StatusKey;

/// The state a printer reported at one point in time.
///
/// A new snapshot replaces the previous one; nothing is merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterStatusSnapshot {
    pub state: String,
    pub blocked_reasons: Vec<String>,
}

impl PrinterStatusSnapshot {
    pub fn new(state: impl Into<String>, blocked_reasons: Vec<String>) -> Self {
        Self { state: state.into(), blocked_reasons }
    }

    pub fn unable_to_connect() -> Self {
        Self::new(StatusKey::UnableToConnect.as_str(), Vec::new())
    }

    pub fn is_reachable(&self) -> bool {
        self.state != StatusKey::UnableToConnect.as_str()
    }
}
