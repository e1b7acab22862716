//! Single-fire event gate.
//!
//! A gate collects subscribers until it fires, then runs each one exactly once
//! and stays fired for the rest of the page lifetime.

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber = Box<dyn FnOnce()>;

#[derive(Default)]
struct GateInner {
    fired: bool,
    subscribers: Vec<Subscriber>,
}

/// Cloneable handle; all clones share the same gate.
#[derive(Clone, Default)]
pub struct OnceGate {
    inner: Rc<RefCell<GateInner>>,
}

impl OnceGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fired(&self) -> bool {
        self.inner.borrow().fired
    }

    /// Run `f` when the gate fires; runs immediately if it already has.
    pub fn subscribe(&self, f: impl FnOnce() + 'static) {
        if self.is_fired() {
            f();
            return;
        }
        self.inner.borrow_mut().subscribers.push(Box::new(f));
    }

    /// Returns true only for the call that actually fired the gate.
    pub fn fire(&self) -> bool {
        let subscribers = {
            let mut inner = self.inner.borrow_mut();
            if inner.fired {
                return false;
            }
            inner.fired = true;
            std::mem::take(&mut inner.subscribers)
        };
        // Borrow released: subscribers may touch the gate again.
        for f in subscribers {
            f();
        }
        true
    }
}
