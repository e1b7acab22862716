//! Project preview modal.
//!
//! One modal hosts an embedded frame that is only pointed at a project when
//! the preview opens, and is reset to an inert address on close so the frame
//! stops loading. Thumbnails open it on click or on a long press.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlIFrameElement, KeyboardEvent, Window};

use crate::config::{BLANK_FRAME, FxConfig};
use crate::dom;
use crate::error::SetupError;

// --- Session state -----------------------------------------------------------

/// What the modal currently shows. At most one session exists per page.
#[derive(Clone, Debug)]
pub struct PreviewSession {
    open: bool,
    frame_src: String,
    title: String,
    blank: String,
    default_title: String,
}

impl Default for PreviewSession {
    fn default() -> Self {
        let cfg = FxConfig::default();
        Self::new(&cfg.blank_frame, &cfg.default_title)
    }
}

impl PreviewSession {
    pub fn new(blank: &str, default_title: &str) -> Self {
        Self {
            open: false,
            frame_src: blank.to_string(),
            title: default_title.to_string(),
            blank: blank.to_string(),
            default_title: default_title.to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn frame_src(&self) -> &str {
        &self.frame_src
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Point the frame at `addr`; an empty or missing title uses the default.
    pub fn open(&mut self, addr: &str, title: Option<&str>) {
        self.frame_src = addr.to_string();
        self.title = match title {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => self.default_title.clone(),
        };
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.frame_src = self.blank.clone();
    }

    /// Escape closes an open preview. Returns whether the key closed it.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close();
            return true;
        }
        false
    }
}

/// Target address of a thumbnail: explicit wrapper attribute, then the inner
/// frame's deferred source, then the frame's live source. Empty values skip.
pub fn resolve_content_address(
    wrap_attr: Option<&str>,
    frame_data_src: Option<&str>,
    frame_src: &str,
) -> String {
    [wrap_attr, frame_data_src, Some(frame_src)]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

// --- Long press ----------------------------------------------------------------

/// At most one pending press; each press gets a fresh token so a stale timer
/// can never open the preview.
#[derive(Clone, Copy, Debug, Default)]
pub struct LongPress {
    next_token: u32,
    pending: Option<u32>,
}

impl LongPress {
    pub fn press(&mut self) -> u32 {
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(self.next_token);
        self.next_token
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Timer expiry for `token`. True only if that press is still held.
    pub fn fire(&mut self, token: u32) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            return true;
        }
        false
    }
}

// --- DOM binding ---------------------------------------------------------------

struct PreviewSurface {
    modal: Element,
    frame: HtmlIFrameElement,
    close_button: HtmlElement,
    root: Option<HtmlElement>,
    body: Option<HtmlElement>,
    session: PreviewSession,
}

impl PreviewSurface {
    fn open(&mut self, addr: &str, title: Option<&str>) {
        self.session.open(addr, title);
        self.frame.set_src(self.session.frame_src());
        self.frame.set_title(self.session.title());
        let _ = self.modal.set_attribute("aria-hidden", "false");
        for el in [&self.root, &self.body].into_iter().flatten() {
            let _ = el.style().set_property("overflow", "hidden");
        }
        let _ = self.close_button.focus();
    }

    fn close(&mut self) {
        self.session.close();
        self.apply_closed();
    }

    fn apply_closed(&self) {
        let _ = self.modal.set_attribute("aria-hidden", "true");
        self.frame.set_src(self.session.frame_src());
        for el in [&self.root, &self.body].into_iter().flatten() {
            let _ = el.style().remove_property("overflow");
        }
    }
}

thread_local! {
    static SURFACE: RefCell<Option<PreviewSurface>> = const { RefCell::new(None) };
}

fn with_surface<R>(f: impl FnOnce(&mut PreviewSurface) -> R) -> Option<R> {
    SURFACE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Open the preview if the modal was wired; no-op otherwise.
pub fn open_preview(addr: &str, title: Option<&str>) {
    with_surface(|s| s.open(addr, title));
}

pub fn close_preview() {
    with_surface(|s| s.close());
}

pub fn is_open() -> bool {
    with_surface(|s| s.session.is_open()).unwrap_or(false)
}

/// Current frame address of the wired modal, if any.
pub fn frame_src() -> Option<String> {
    with_surface(|s| s.frame.src())
}

/// Wire the modal, its close triggers and every thumbnail.
/// Returns the number of thumbnails wired.
pub fn install(win: &Window, doc: &Document, cfg: &FxConfig) -> Result<usize, SetupError> {
    let modal = doc
        .get_element_by_id(&cfg.modal_id)
        .ok_or_else(|| SetupError::missing(format!("#{}", cfg.modal_id)))?;
    let frame: HtmlIFrameElement = dom::query_in(&modal, &cfg.modal_frame_selector)?;
    let close_button: HtmlElement = dom::query_in(&modal, &cfg.modal_close_selector)?;
    // The backdrop is optional; without it only the button and Escape close.
    let backdrop: Option<Element> = modal.query_selector(&cfg.modal_backdrop_selector)?;

    let blank = if cfg.blank_frame.is_empty() { BLANK_FRAME } else { &cfg.blank_frame };
    SURFACE.with(|cell| {
        *cell.borrow_mut() = Some(PreviewSurface {
            modal: modal.clone(),
            frame,
            close_button: close_button.clone(),
            root: doc.document_element().and_then(|e| e.dyn_into::<HtmlElement>().ok()),
            body: doc.body(),
            session: PreviewSession::new(blank, &cfg.default_title),
        });
    });

    dom::listen(&close_button, "click", false, |_: web_sys::Event| close_preview())?;
    if let Some(backdrop) = backdrop {
        dom::listen(&backdrop, "click", false, |_: web_sys::Event| close_preview())?;
    }
    dom::listen(win, "keydown", false, |evt: KeyboardEvent| {
        with_surface(|s| {
            if s.session.handle_key(&evt.key()) {
                s.apply_closed();
            }
        });
    })?;

    let mut wired = 0;
    for wrap in dom::query_all(doc, &cfg.thumbnail_selector)? {
        match wire_thumbnail(&wrap, cfg) {
            Ok(()) => wired += 1,
            Err(err) => gloo::console::debug!(format!("preview: thumbnail skipped: {err}")),
        }
    }
    Ok(wired)
}

fn thumbnail_title(wrap: &Element, fallback: &str) -> String {
    wrap.query_selector("iframe")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlIFrameElement>().ok())
        .map(|f| f.title())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

struct PressState {
    gesture: LongPress,
    timer: Option<Timeout>,
}

fn wire_thumbnail(wrap: &Element, cfg: &FxConfig) -> Result<(), SetupError> {
    let thumb: HtmlIFrameElement = dom::query_in(wrap, "iframe")?;
    let addr = resolve_content_address(
        wrap.get_attribute("data-src").as_deref(),
        thumb.get_attribute("data-src").as_deref(),
        &thumb.src(),
    );
    // Non-interactive visual preview; pointer events are disabled in CSS.
    thumb.set_attribute("loading", "lazy")?;
    thumb.set_src(&addr);

    let fallback = cfg.default_thumbnail_title.clone();
    {
        let (wrap_c, addr, fallback) = (wrap.clone(), addr.clone(), fallback.clone());
        dom::listen(wrap, "click", false, move |_: web_sys::Event| {
            open_preview(&addr, Some(&thumbnail_title(&wrap_c, &fallback)));
        })?;
    }

    let press = Rc::new(RefCell::new(PressState { gesture: LongPress::default(), timer: None }));
    {
        let (press_c, wrap_c, delay) = (press.clone(), wrap.clone(), cfg.long_press_ms);
        dom::listen(wrap, "pointerdown", false, move |_: web_sys::Event| {
            let token = press_c.borrow_mut().gesture.press();
            let (state, wrap_t, addr, fallback) =
                (press_c.clone(), wrap_c.clone(), addr.clone(), fallback.clone());
            let timer = Timeout::new(delay, move || {
                if state.borrow_mut().gesture.fire(token) {
                    open_preview(&addr, Some(&thumbnail_title(&wrap_t, &fallback)));
                }
            });
            // Replacing drops (and clears) any earlier timer.
            press_c.borrow_mut().timer = Some(timer);
        })?;
    }
    for event in ["pointerup", "pointerleave", "pointercancel"] {
        let press_c = press.clone();
        dom::listen(wrap, event, false, move |_: web_sys::Event| {
            let mut state = press_c.borrow_mut();
            state.gesture.cancel();
            state.timer = None;
        })?;
    }
    Ok(())
}
