// Preview session state and long-press timing, without a browser.

use portfolio_fx::preview::{LongPress, PreviewSession, resolve_content_address};

const ADDRESSES: &[&str] = &[
    "https://shop.example.com/",
    "https://example.org/case-study?id=7#top",
    "about:blank",
    "",
    "/relative/path.html",
];

#[test]
fn close_right_after_open_always_blanks_the_frame() {
    for addr in ADDRESSES {
        let mut s = PreviewSession::default();
        s.open(addr, Some("Project"));
        assert_eq!(s.frame_src(), *addr);
        s.close();
        assert_eq!(s.frame_src(), "about:blank", "frame kept {addr:?} after close");
        assert!(!s.is_open());
    }
}

#[test]
fn open_without_title_uses_default() {
    let mut s = PreviewSession::default();
    s.open("https://a.example/", None);
    assert_eq!(s.title(), "Vista previa");
    assert!(s.is_open());
}

#[test]
fn escape_only_acts_on_an_open_preview() {
    let mut s = PreviewSession::default();
    assert!(!s.handle_key("Escape"));
    assert!(!s.is_open());
    assert_eq!(s.frame_src(), "about:blank");

    s.open("https://a.example/", None);
    assert!(!s.handle_key("Enter"));
    assert!(s.is_open());
    assert!(s.handle_key("Escape"));
    assert!(!s.handle_key("Escape"));
    assert_eq!(s.frame_src(), "about:blank");
}

#[test]
fn thumbnail_address_precedence() {
    assert_eq!(
        resolve_content_address(Some("https://wrap/"), Some("https://data/"), "https://live/"),
        "https://wrap/"
    );
    assert_eq!(resolve_content_address(None, Some("https://data/"), "https://live/"), "https://data/");
    assert_eq!(resolve_content_address(None, None, "https://live/"), "https://live/");
}

// --- Long press on a virtual clock -------------------------------------------

const HOLD_MS: u32 = 350;

/// Mirrors the DOM wiring: pointerdown arms a timer, release events cancel
/// the gesture and drop the timer.
#[derive(Default)]
struct Thumb {
    gesture: LongPress,
    timer: Option<(u32, u32)>, // (due, token)
    opened: usize,
}

impl Thumb {
    fn down(&mut self, now: u32) {
        let token = self.gesture.press();
        self.timer = Some((now + HOLD_MS, token));
    }

    fn up(&mut self) {
        self.gesture.cancel();
        self.timer = None;
    }

    fn advance_to(&mut self, now: u32) {
        if let Some((due, token)) = self.timer {
            if now >= due && self.gesture.fire(token) {
                self.opened += 1;
            }
        }
    }
}

#[test]
fn hold_past_threshold_opens_exactly_once() {
    let mut t = Thumb::default();
    t.down(0);
    t.advance_to(349);
    assert_eq!(t.opened, 0);
    t.advance_to(350);
    t.advance_to(900);
    assert_eq!(t.opened, 1);
    t.up();
    t.advance_to(2000);
    assert_eq!(t.opened, 1);
}

#[test]
fn release_at_200ms_never_opens() {
    let mut t = Thumb::default();
    t.down(0);
    t.advance_to(200);
    t.up();
    t.advance_to(10_000);
    assert_eq!(t.opened, 0);
}

#[test]
fn stale_timer_from_earlier_press_is_ignored() {
    let mut gesture = LongPress::default();
    let first = gesture.press();
    gesture.cancel();
    let second = gesture.press();
    assert!(!gesture.fire(first));
    assert!(gesture.is_pending());
    assert!(gesture.fire(second));
}
