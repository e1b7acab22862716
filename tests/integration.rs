// Integration tests (native) for the `portfolio-fx` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use portfolio_fx::reveal::RevealTracker;
use portfolio_fx::{FxConfig, preview};

// Without init_page the modal is never wired; the preview API is a no-op.
#[test]
fn preview_api_is_inert_before_setup() {
    preview::open_preview("https://a.example/", Some("A"));
    assert!(!preview::is_open());
    assert_eq!(preview::frame_src(), None);
    preview::close_preview();
}

#[test]
fn reveal_reports_each_element_once_under_repeated_scrolling() {
    let mut tracker = RevealTracker::new(8);
    let mut events = Vec::new();
    for pass in 0..4 {
        for i in 0..8 {
            let visible = (i + pass) % 3 != 0;
            if tracker.record(i, visible) {
                events.push(i);
            }
        }
    }
    let mut sorted = events.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), events.len(), "duplicate reveal events: {events:?}");
    assert_eq!(tracker.revealed_count(), 8);
    for i in 0..8 {
        assert!(!tracker.record(i, true));
        assert!(tracker.is_revealed(i));
    }
}

#[test]
fn default_config_lists_reveal_roles_in_order() {
    let cfg = FxConfig::default();
    assert_eq!(cfg.reveal_selectors, vec![".section", ".card", ".tag", ".reason"]);
    assert_eq!(cfg.reveal_visible_class, "reveal-visible");
}
