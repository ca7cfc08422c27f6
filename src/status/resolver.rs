use indexmap::IndexSet;
use log::trace;

use super::{StatusKey, StatusKeyMap};

/// Maps a printer state and its block reasons to the status lines to show.
///
/// Reasons come first, in the order reported. The state itself is only
/// added when no reason resolved, or when the printer is running.
/// `spool-area-full` is ignored unless the printer is blocked. Keys without
/// a message are dropped. An empty result means no status should be shown.
pub fn resolve<S: AsRef<str>>(state: &str, reasons: &[S], key_map: &StatusKeyMap) -> IndexSet<String> {
    let mut messages = IndexSet::new();

    for reason in reasons.iter().map(AsRef::as_ref) {
        if reason.trim().is_empty() {
            continue;
        }
        if reason == StatusKey::SpoolAreaFull.as_str() && state != StatusKey::Blocked.as_str() {
            trace!("Ignoring '{reason}' while printer is '{state}'");
            continue;
        }
        match key_map.lookup(reason) {
            Some(message) => {
                messages.insert(message.to_owned());
            }
            None => trace!("No message for block reason '{reason}'"),
        }
    }

    if messages.is_empty() || state == StatusKey::Running.as_str() {
        match key_map.lookup(state) {
            Some(message) => {
                messages.insert(message.to_owned());
            }
            None => trace!("No message for printer state '{state}'"),
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_vec(state: &str, reasons: &[&str]) -> Vec<String> {
        resolve(state, reasons, &StatusKeyMap::default()).into_iter().collect()
    }

    #[test]
    fn spool_area_full_only_counts_while_blocked() {
        assert_eq!(resolve_vec("blocked", &["spool-area-full"]), vec!["Spool area full"]);
        assert_eq!(resolve_vec("idle", &["spool-area-full"]), vec!["Ready"]);
        assert_eq!(resolve_vec("running", &["spool-area-full"]), vec!["Printing"]);
    }

    #[test]
    fn running_is_always_shown() {
        assert_eq!(resolve_vec("running", &["marker-ink-almost-empty"]), vec!["Low on ink", "Printing"]);
        assert_eq!(resolve_vec("running", &["some-other-reason"]), vec!["Printing"]);
    }

    #[test]
    fn reasons_replace_the_state() {
        assert_eq!(resolve_vec("blocked", &["jam", "opened"]), vec!["Paper jam", "Door open"]);
        assert_eq!(resolve_vec("idle", &["marker-toner-almost-empty"]), vec!["Low on toner"]);
    }

    #[test]
    fn no_reasons_resolves_to_the_state_alone() {
        assert_eq!(resolve_vec("idle", &[]), vec!["Ready"]);
        assert_eq!(resolve_vec("unable-to-connect", &[]), vec!["Offline"]);
        assert_eq!(resolve_vec("blocked", &[]), vec!["Check printer"]);
        assert!(resolve_vec("stopped-by-alien", &[]).is_empty());
    }

    #[test]
    fn duplicate_messages_collapse_in_first_occurrence_order() {
        let resolved = resolve_vec(
            "blocked",
            &["marker-ink-almost-empty", "jam", "marker-ink-really-low", "jam", "marker-ink-almost-empty"],
        );
        assert_eq!(resolved, vec!["Low on ink", "Paper jam"]);
    }

    #[test]
    fn state_message_equal_to_a_reason_is_not_repeated() {
        // service-request and blocked share "Check printer".
        assert_eq!(resolve_vec("blocked", &["service-request"]), vec!["Check printer"]);
    }

    #[test]
    fn blank_and_unknown_reasons_are_skipped() {
        assert_eq!(resolve_vec("idle", &["", "  ", "toner-on-fire"]), vec!["Ready"]);
        assert_eq!(resolve_vec("blocked", &["", "jam"]), vec!["Paper jam"]);
    }

    #[test]
    fn empty_map_hides_everything() {
        let map = StatusKeyMap::builder().build();
        assert!(resolve("running", &["jam"], &map).is_empty());
    }

    #[test]
    fn accepts_owned_reason_lists() {
        let reasons = vec!["device-busy".to_string()];
        let resolved = resolve("idle", &reasons, &StatusKeyMap::default());
        assert_eq!(resolved.first().map(String::as_str), Some("Printer busy"));
    }
}
