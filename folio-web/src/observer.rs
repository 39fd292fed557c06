use folio_core::config::ObserverCfg;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::DomError;

pub type ObserverCallback = Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>;

/// Build an intersection observer from config and leak its callback.
///
/// The callback receives the batch already converted to typed entries, in
/// delivery order.
///
/// # Errors
/// Returns an error if the browser lacks `IntersectionObserver` or rejects the options.
pub fn create(cfg: &ObserverCfg, mut callback: ObserverCallback) -> Result<IntersectionObserver, DomError> {
    let init = IntersectionObserverInit::new();
    init.set_root_margin(&cfg.root_margin);
    init.set_threshold(&JsValue::from_f64(cfg.threshold));

    let closure = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entries = entries
            .iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            .collect();
        callback(entries, observer);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
    closure.forget();
    Ok(observer)
}
