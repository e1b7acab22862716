//! Scroll reveal: each watched element flips to its visible styling the first
//! time it crosses the visibility threshold, then is no longer observed.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::FxConfig;
use crate::dom;
use crate::error::SetupError;

/// Monotonic revealed flags, one per watched element.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Feed one intersection record. Returns true exactly once per element:
    /// on its first intersecting record.
    pub fn record(&mut self, index: usize, is_intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if is_intersecting && !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

/// Tag every reveal target and start observing. No targets is a no-op.
pub fn install(doc: &Document, cfg: &FxConfig) -> Result<usize, SetupError> {
    let mut elements: Vec<Element> = Vec::new();
    for selector in &cfg.reveal_selectors {
        elements.extend(dom::query_all(doc, selector)?);
    }
    if elements.is_empty() {
        return Ok(0);
    }
    for el in &elements {
        el.class_list().add_1(&cfg.reveal_class)?;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
    let watched = Rc::new(elements);
    let visible_class = cfg.reveal_visible_class.clone();

    let closure = {
        let watched = watched.clone();
        Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                // An element listed under two selectors reveals on its first slot.
                let Some(index) = watched.iter().position(|el| *el == target) else {
                    continue;
                };
                if tracker.borrow_mut().record(index, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(&visible_class);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(_, _)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(cfg.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
    closure.forget();

    for el in watched.iter() {
        observer.observe(el);
    }
    Ok(watched.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_monotonic_and_reported_once() {
        let mut t = RevealTracker::new(3);
        assert!(!t.record(1, false));
        assert!(t.record(1, true));
        assert!(!t.record(1, true));
        // scrolling away never hides it again
        assert!(!t.record(1, false));
        assert!(t.is_revealed(1));
        assert_eq!(t.revealed_count(), 1);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut t = RevealTracker::new(1);
        assert!(!t.record(5, true));
        assert!(!t.is_revealed(5));
    }
}
