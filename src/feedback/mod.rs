//! Interaction chimes.
//!
//! The device modality is classified once; it selects a binding plan (see
//! `plan`) that is turned into element listeners here. Touch devices stay
//! silent except for button presses until the user explicitly enables audio,
//! after which hover-enter chimes are attached as well.

mod modality;
mod plan;

pub use modality::{DeviceSignals, Modality};
pub use plan::{Action, Binding, FeedbackPlan, Membership, Scope, Trigger};

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAudioElement, HtmlMediaElement, Window};

use crate::config::FxConfig;
use crate::dom;
use crate::error::SetupError;
use crate::gate::OnceGate;
use crate::media::play_chime;
use crate::style;

pub fn read_signals(win: &Window, cfg: &FxConfig) -> DeviceSignals {
    let hover_media = win
        .match_media(&cfg.hover_media_query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    let touch_event_surface = js_sys::Reflect::has(win, &"ontouchstart".into()).unwrap_or(false);
    DeviceSignals {
        hover_media,
        touch_event_surface,
        max_touch_points: win.navigator().max_touch_points(),
    }
}

fn membership(el: &Element, cfg: &FxConfig) -> Membership {
    let is = |selector: &str| el.matches(selector).unwrap_or(false);
    Membership {
        hover_target: is(&cfg.hover_selector()),
        tap_target: is(&cfg.tap_selector()),
        button: is(&cfg.button_selector),
    }
}

/// Everything a binding needs to become listeners. Target sets are captured
/// once at install; the consent upgrade reuses them.
struct Wiring {
    doc: Document,
    cfg: FxConfig,
    chime: HtmlMediaElement,
    hover_targets: Vec<Element>,
    tap_targets: Vec<Element>,
    buttons: Vec<Element>,
}

impl Wiring {
    fn new(doc: &Document, cfg: &FxConfig, chime: HtmlMediaElement) -> Result<Self, SetupError> {
        Ok(Self {
            doc: doc.clone(),
            cfg: cfg.clone(),
            chime,
            hover_targets: dom::query_all(doc, &cfg.hover_selector())?,
            tap_targets: dom::query_all(doc, &cfg.tap_selector())?,
            buttons: dom::query_all(doc, &cfg.button_selector)?,
        })
    }

    fn targets(&self, scope: Scope) -> &[Element] {
        match scope {
            Scope::HoverTargets => &self.hover_targets,
            Scope::TapTargets => &self.tap_targets,
            Scope::Buttons => &self.buttons,
        }
    }

    fn attach(&self, binding: Binding) -> Result<(), SetupError> {
        if binding.trigger == Trigger::FocusIn {
            return self.attach_focus(binding);
        }
        for el in self.targets(binding.scope) {
            let member = membership(el, &self.cfg);
            let chime = self.chime.clone();
            // Enter, not move: moving inside an element must not retrigger.
            dom::listen(el, binding.trigger.event_name(), true, move |evt: web_sys::Event| {
                if binding.fires(member, binding.trigger, dom::is_primary(&evt)) {
                    play_chime(&chime);
                }
            })?;
        }
        Ok(())
    }

    /// Focus chimes hang off one document listener; only the focused element
    /// itself counts, not its ancestors.
    fn attach_focus(&self, binding: Binding) -> Result<(), SetupError> {
        let (chime, cfg) = (self.chime.clone(), self.cfg.clone());
        dom::listen(&self.doc, "focusin", false, move |evt: web_sys::FocusEvent| {
            let Some(el) = evt.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if binding.fires(membership(&el, &cfg), Trigger::FocusIn, true) {
                play_chime(&chime);
            }
        })?;
        Ok(())
    }
}

/// Classify the device and wire chimes. Without the chime element the whole
/// coordinator stays inert.
pub fn install(win: &Window, doc: &Document, cfg: &FxConfig, consent: OnceGate) -> Result<Modality, SetupError> {
    let audio: HtmlAudioElement = dom::by_id(doc, &cfg.chime_audio_id)?;
    let chime: HtmlMediaElement = audio.into();
    chime.set_volume(cfg.chime_volume);

    let signals = read_signals(win, cfg);
    let modality = Modality::classify(signals);
    gloo::console::debug!(format!("feedback: {signals:?} -> {modality:?}"));

    let plan = Rc::new(RefCell::new(FeedbackPlan::for_modality(modality)));
    let wiring = Rc::new(Wiring::new(doc, cfg, chime)?);
    for binding in plan.borrow().bindings() {
        wiring.attach(*binding)?;
    }

    if modality == Modality::TouchOnly {
        let animated = wiring
            .tap_targets
            .iter()
            .filter(|el| style::element_animates(win, el))
            .count();
        gloo::console::debug!(format!("feedback: touch device, {animated} animated tap targets kept silent"));

        consent.subscribe(move || {
            let added = plan.borrow_mut().grant_consent();
            for binding in added {
                if let Err(err) = wiring.attach(binding) {
                    gloo::console::warn!(format!("feedback: consent upgrade failed: {err}"));
                }
            }
            gloo::console::debug!("feedback: audio consent, hover chimes enabled");
        });
    }
    Ok(modality)
}
