use ipp::model::PrinterState;

use crate::status::{PrinterStatusSnapshot, StatusKey};

// printer-state-reasons may carry any of these (RFC 8011 5.4.12).
const SEVERITY_SUFFIXES: [&str; 3] = ["-error", "-warning", "-report"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
    Report,
}

fn split_severity(keyword: &str) -> (&str, Severity) {
    for (suffix, severity) in SEVERITY_SUFFIXES.iter().zip([Severity::Error, Severity::Warning, Severity::Report]) {
        if let Some(base) = keyword.strip_suffix(suffix) {
            return (base, severity);
        }
    }
    // No suffix means error.
    (keyword, Severity::Error)
}

/// Maps one `printer-state-reasons` keyword to a block reason key.
///
/// Keywords with no block reason of their own (`none`, `paused`, `other`
/// warnings) map to `None`. Unrecognized keywords are returned unchanged.
pub fn block_reason_from_ipp(keyword: &str) -> Option<String> {
    let (base, severity) = split_severity(keyword);
    let key = match base {
        "none" | "paused" => return None,
        "other" if severity != Severity::Error => return None,
        "other" => StatusKey::ServiceRequest,
        "media-needed" | "media-empty" => StatusKey::OutOfPaper,
        "marker-supply-low" => StatusKey::LowOnInk,
        "toner-low" => StatusKey::LowOnToner,
        "marker-supply-empty" => StatusKey::OutOfInk,
        "toner-empty" => StatusKey::OutOfToner,
        "door-open" | "cover-open" => StatusKey::DoorOpen,
        "media-jam" => StatusKey::Jammed,
        "shutdown" | "offline" => StatusKey::DeviceOffline,
        "spool-area-full" => StatusKey::SpoolAreaFull,
        other => return Some(other.to_string()),
    };
    Some(key.as_str().to_string())
}

pub fn printer_state_key(state: Option<PrinterState>) -> StatusKey {
    match state {
        Some(PrinterState::Idle) => StatusKey::Idle,
        Some(PrinterState::Processing) => StatusKey::Running,
        Some(PrinterState::Stopped) => StatusKey::Blocked,
        None => StatusKey::UnableToConnect,
    }
}

/// Builds a status snapshot from `printer-state` and `printer-state-reasons`.
pub fn status_from_ipp<S: AsRef<str>>(state: Option<PrinterState>, reasons: &[S]) -> PrinterStatusSnapshot {
    let state_key = printer_state_key(state);
    if state_key == StatusKey::UnableToConnect {
        return PrinterStatusSnapshot::unable_to_connect();
    }

    let blocked_reasons = reasons.iter().filter_map(|reason| block_reason_from_ipp(reason.as_ref())).collect();
    PrinterStatusSnapshot::new(state_key.as_str(), blocked_reasons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_suffixes_are_stripped() {
        assert_eq!(block_reason_from_ipp("media-jam-error").as_deref(), Some("jam"));
        assert_eq!(block_reason_from_ipp("toner-low-warning").as_deref(), Some("marker-toner-almost-empty"));
        assert_eq!(block_reason_from_ipp("door-open-report").as_deref(), Some("opened"));
        assert_eq!(block_reason_from_ipp("cover-open").as_deref(), Some("opened"));
    }

    #[test]
    fn other_is_only_a_service_request_as_error() {
        assert_eq!(block_reason_from_ipp("other-error").as_deref(), Some("service-request"));
        assert_eq!(block_reason_from_ipp("other").as_deref(), Some("service-request"));
        assert_eq!(block_reason_from_ipp("other-warning"), None);
    }

    #[test]
    fn none_and_paused_carry_no_reason() {
        assert_eq!(block_reason_from_ipp("none"), None);
        assert_eq!(block_reason_from_ipp("paused"), None);
    }

    #[test]
    fn unknown_keywords_pass_through_without_severity() {
        assert_eq!(block_reason_from_ipp("cups-insecure-filter-warning").as_deref(), Some("cups-insecure-filter"));
    }

    #[test]
    fn printer_states_map_to_keys() {
        assert_eq!(printer_state_key(Some(PrinterState::Idle)), StatusKey::Idle);
        assert_eq!(printer_state_key(Some(PrinterState::Processing)), StatusKey::Running);
        assert_eq!(printer_state_key(Some(PrinterState::Stopped)), StatusKey::Blocked);
        assert_eq!(printer_state_key(None), StatusKey::UnableToConnect);
    }

    #[test]
    fn snapshot_keeps_reason_order() {
        let snapshot = status_from_ipp(
            Some(PrinterState::Stopped),
            &["media-empty-error", "none", "spool-area-full", "marker-supply-low-warning"],
        );

        assert_eq!(snapshot.state, "blocked");
        assert_eq!(snapshot.blocked_reasons, vec!["input-media-supply-empty", "spool-area-full", "marker-ink-almost-empty"]);
    }

    #[test]
    fn missing_state_means_unable_to_connect() {
        let snapshot = status_from_ipp(None, &["media-jam-error"]);
        assert_eq!(snapshot, PrinterStatusSnapshot::unable_to_connect());
        assert!(!snapshot.is_reachable());
    }
}
