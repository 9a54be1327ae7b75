//! Integration tests for alert assembly and the in-process log.
//!
//! The durable-store path needs a live Postgres and is not exercised
//! here; classification and record assembly are.

use blockwatch_core::alert::BlocklistAlert;
use blockwatch_ingest::{AlertIngestor, AlertLog};
use blockwatch_slack::MessageEvent;

fn event(text: &str) -> MessageEvent {
    MessageEvent {
        text: text.to_string(),
        channel: "C1".to_string(),
        ts: "1700000000.5".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: gate short-circuit
// ---------------------------------------------------------------------------

/// Messages without the keyword produce no alert at all.
#[test]
fn non_qualifying_message_builds_nothing() {
    assert_eq!(AlertIngestor::build_alert(&event("deploy finished")), None);
    assert_eq!(AlertIngestor::build_alert(&event("Host blacklisted")), None);
    assert_eq!(AlertIngestor::build_alert(&event("")), None);
}

// ---------------------------------------------------------------------------
// Test: record assembly
// ---------------------------------------------------------------------------

/// A qualifying message carries the channel and timestamp through
/// unmodified alongside the extracted fields.
#[test]
fn qualifying_message_builds_full_record() {
    let text = "Title: Foo\nAccount Name: Bar\nMonitoring Group: Ops\n\
                Assets Blocklisted: <http://x|x.com>\nZone Names: <http://y|y.com>\nblocklisted";

    let alert = AlertIngestor::build_alert(&event(text)).expect("message qualifies");

    assert_eq!(
        alert,
        BlocklistAlert {
            title: Some("Foo".into()),
            account_name: Some("Bar".into()),
            monitoring_group: Some("Ops".into()),
            assets_blocklisted: Some("x.com".into()),
            zone_names: Some("y.com".into()),
            channel: "C1".into(),
            ts: "1700000000.5".into(),
        }
    );
}

/// The keyword alone qualifies; all content fields stay absent.
#[test]
fn bare_keyword_builds_empty_record() {
    let alert = AlertIngestor::build_alert(&event("blocklisted")).expect("message qualifies");
    assert_eq!(alert.title, None);
    assert_eq!(alert.account_name, None);
    assert_eq!(alert.monitoring_group, None);
    assert_eq!(alert.assets_blocklisted, None);
    assert_eq!(alert.zone_names, None);
    assert_eq!(alert.channel, "C1");
}

// ---------------------------------------------------------------------------
// Test: in-process log
// ---------------------------------------------------------------------------

/// Appends accumulate in arrival order and snapshots are detached copies.
#[test]
fn alert_log_accumulates_in_order() {
    let log = AlertLog::new();
    assert!(log.is_empty());

    let first = AlertIngestor::build_alert(&event("first one blocklisted")).unwrap();
    let second = AlertIngestor::build_alert(&event("second one blocklisted")).unwrap();
    log.push(first.clone());
    log.push(second.clone());

    assert_eq!(log.len(), 2);
    let mut snapshot = log.snapshot();
    assert_eq!(snapshot, vec![first, second]);

    // The snapshot is a detached copy; clearing it leaves the log intact.
    snapshot.clear();
    assert_eq!(log.len(), 2);
}
