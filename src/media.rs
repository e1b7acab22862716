//! Audio and visibility seams between the controllers and the DOM.
//!
//! Controllers only talk to `AudioSink` / `Visibility`, so their decisions are
//! testable on the host; the browser types implement both traits below.

use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{HtmlElement, HtmlMediaElement};

/// Result of a playback request. Rejection (autoplay policy, missing source)
/// is an ordinary outcome, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    Rejected,
}

pub type PlayCallback = Box<dyn FnOnce(PlayOutcome)>;

pub trait AudioSink {
    fn volume(&self) -> f64;
    fn set_volume(&self, volume: f64);
    fn is_paused(&self) -> bool;
    /// Seek back to the start.
    fn rewind(&self);
    /// Ask for playback; `on_done` runs once with the outcome, possibly later.
    fn request_play(&self, on_done: PlayCallback);
}

pub trait Visibility {
    fn set_visible(&self, visible: bool);
}

/// Restart the chime from zero and play it, dropping any rejection.
pub fn play_chime<S: AudioSink + ?Sized>(sink: &S) {
    sink.rewind();
    sink.request_play(Box::new(|_| {}));
}

// --- Browser implementations -------------------------------------------------

impl AudioSink for HtmlMediaElement {
    fn volume(&self) -> f64 {
        HtmlMediaElement::volume(self)
    }

    fn set_volume(&self, volume: f64) {
        HtmlMediaElement::set_volume(self, volume);
    }

    fn is_paused(&self) -> bool {
        HtmlMediaElement::paused(self)
    }

    fn rewind(&self) {
        HtmlMediaElement::set_current_time(self, 0.0);
    }

    fn request_play(&self, on_done: PlayCallback) {
        match HtmlMediaElement::play(self) {
            Ok(promise) => spawn_local(async move {
                let outcome = match JsFuture::from(promise).await {
                    Ok(_) => PlayOutcome::Started,
                    Err(_) => PlayOutcome::Rejected,
                };
                on_done(outcome);
            }),
            // Older engines throw synchronously instead of rejecting.
            Err(_) => on_done(PlayOutcome::Rejected),
        }
    }
}

impl Visibility for HtmlElement {
    fn set_visible(&self, visible: bool) {
        HtmlElement::set_hidden(self, !visible);
    }
}

/// An absent element simply has nothing to show or hide.
impl<V: Visibility> Visibility for Option<V> {
    fn set_visible(&self, visible: bool) {
        if let Some(v) = self {
            v.set_visible(visible);
        }
    }
}
