//! Thin DOM helpers shared by the components.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, NodeList, Window, window};

use crate::error::SetupError;
use crate::gate::OnceGate;

pub fn window_and_document() -> Result<(Window, Document), SetupError> {
    let win = window().ok_or_else(|| SetupError::missing("window"))?;
    let doc = win.document().ok_or_else(|| SetupError::missing("document"))?;
    Ok((win, doc))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, SetupError> {
    Ok(elements(doc.query_selector_all(selector)?))
}

pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T, SetupError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| SetupError::missing(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| SetupError::wrong_type(format!("#{id}")))
}

/// First descendant of `scope` matching `selector`, cast to `T`.
pub fn query_in<T: JsCast>(scope: &Element, selector: &str) -> Result<T, SetupError> {
    scope
        .query_selector(selector)?
        .ok_or_else(|| SetupError::missing(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SetupError::wrong_type(selector.to_string()))
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if passive {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        )?;
    } else {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    }
    closure.forget();
    Ok(())
}

/// `PointerEvent.isPrimary`, treating non-pointer events as primary.
pub fn is_primary(event: &web_sys::Event) -> bool {
    event
        .dyn_ref::<web_sys::PointerEvent>()
        .map(|p| p.is_primary())
        .unwrap_or(true)
}

/// One passive listener shared by several event types on `target`. The first
/// event of any of those types removes it from all of them and fires `gate`.
pub fn fire_once_on_any(
    target: &EventTarget,
    events: &'static [&'static str],
    gate: OnceGate,
) -> Result<(), JsValue> {
    let registered: Rc<RefCell<Option<js_sys::Function>>> = Rc::default();
    let closure = {
        let (target, registered) = (target.clone(), registered.clone());
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(func) = registered.borrow_mut().take() {
                for event in events {
                    let _ = target.remove_event_listener_with_callback(event, &func);
                }
            }
            gate.fire();
        }) as Box<dyn FnMut(_)>)
    };
    let func: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    for event in events {
        target.add_event_listener_with_callback_and_add_event_listener_options(event, &func, &opts)?;
    }
    *registered.borrow_mut() = Some(func);
    closure.forget();
    Ok(())
}
