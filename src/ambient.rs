//! Looping ambient track with an "enable audio" affordance.
//!
//! Autoplay is attempted after a short settle delay and again on the first
//! interaction anywhere on the page. Whenever the browser rejects playback the
//! affordance is shown; activating it is the user's explicit consent.

use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::{Document, HtmlAudioElement, HtmlElement, HtmlMediaElement, Window};

use crate::config::FxConfig;
use crate::dom;
use crate::error::SetupError;
use crate::gate::OnceGate;
use crate::media::{AudioSink, PlayOutcome, Visibility};

/// Window events that count as "the user interacted with the page".
pub const INTERACTION_EVENTS: &[&str] = &["pointerdown", "keydown", "touchstart"];

pub struct AmbientAudio<S, V> {
    sink: S,
    affordance: V,
    volume: f64,
    affordance_visible: Cell<bool>,
    /// Set by a hard media error; the affordance stays hidden from then on.
    failed: Cell<bool>,
    consent: OnceGate,
}

impl<S, V> AmbientAudio<S, V>
where
    S: AudioSink + 'static,
    V: Visibility + 'static,
{
    pub fn new(sink: S, affordance: V, volume: f64, consent: OnceGate) -> Rc<Self> {
        Rc::new(Self {
            sink,
            affordance,
            volume,
            affordance_visible: Cell::new(false),
            failed: Cell::new(false),
            consent,
        })
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn affordance_visible(&self) -> bool {
        self.affordance_visible.get()
    }

    pub fn consent(&self) -> &OnceGate {
        &self.consent
    }

    /// (Re)start playback at the fixed volume; the outcome drives the affordance.
    pub fn attempt(self: &Rc<Self>) {
        self.sink.set_volume(self.volume);
        let this = Rc::clone(self);
        self.sink.request_play(Box::new(move |outcome| this.settle(outcome)));
    }

    /// First interaction anywhere: retry only if nothing is playing yet.
    pub fn on_first_interaction(self: &Rc<Self>) {
        if self.sink.is_paused() {
            self.attempt();
        }
    }

    /// Affordance activated. Counts as consent even if playback is still refused.
    pub fn enable(self: &Rc<Self>) {
        self.consent.fire();
        self.attempt();
    }

    pub fn on_media_error(&self) {
        self.failed.set(true);
        self.show_affordance(false);
    }

    fn settle(&self, outcome: PlayOutcome) {
        self.show_affordance(outcome == PlayOutcome::Rejected);
    }

    fn show_affordance(&self, visible: bool) {
        let visible = visible && !self.failed.get();
        self.affordance_visible.set(visible);
        self.affordance.set_visible(visible);
    }
}

pub type PageAmbient = AmbientAudio<HtmlMediaElement, Option<HtmlElement>>;

/// Wire the ambient track. The affordance fires `consent` even when the audio
/// element itself is missing, so chime upgrades still work.
pub fn install(
    win: &Window,
    doc: &Document,
    cfg: &FxConfig,
    consent: OnceGate,
) -> Result<Rc<PageAmbient>, SetupError> {
    let button: Option<HtmlElement> = dom::by_id(doc, &cfg.unmute_button_id).ok();
    let audio: HtmlAudioElement = match dom::by_id(doc, &cfg.ambient_audio_id) {
        Ok(audio) => audio,
        Err(err) => {
            if let Some(button) = &button {
                let consent = consent.clone();
                dom::listen(button, "click", false, move |_: web_sys::Event| {
                    consent.fire();
                })?;
            }
            return Err(err);
        }
    };
    audio.set_loop(true);

    let ambient: Rc<PageAmbient> =
        AmbientAudio::new(audio.clone().into(), button, cfg.ambient_volume, consent);

    {
        let ambient = ambient.clone();
        Timeout::new(cfg.settle_delay_ms, move || ambient.attempt()).forget();
    }

    let first_interaction = OnceGate::new();
    {
        let ambient = ambient.clone();
        first_interaction.subscribe(move || ambient.on_first_interaction());
    }
    dom::fire_once_on_any(win, INTERACTION_EVENTS, first_interaction)?;

    if let Some(button) = &ambient.affordance {
        let ambient = ambient.clone();
        dom::listen(button, "click", false, move |_: web_sys::Event| ambient.enable())?;
    }
    {
        let ambient = ambient.clone();
        dom::listen(&audio, "error", false, move |_: web_sys::Event| {
            gloo::console::warn!("ambient: media error, audio disabled for this page");
            ambient.on_media_error();
        })?;
    }
    Ok(ambient)
}
