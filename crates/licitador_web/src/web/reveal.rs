use std::rc::Rc;

use licitador::markup;
use licitador::SiteError;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::dom::{query_all, set_class, set_style};
use super::Controller;

impl Controller {
    /// Hides the content cards and fades each one in the first time it
    /// scrolls into view.
    pub(super) fn init_reveal(self: &Rc<Self>) -> Result<(), SiteError> {
        let ctl = Rc::clone(self);
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        ctl.reveal_target(&entry, &observer);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let opts = IntersectionObserverInit::new();
        opts.set_threshold(&JsValue::from_f64(self.cfg.reveal_threshold));
        opts.set_root_margin(&self.cfg.reveal_root_margin);
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &opts)
                .map_err(|_| SiteError::dom("IntersectionObserver unavailable"))?;
        on_intersect.forget();

        let selector = self.cfg.reveal_selector();
        for el in query_all::<HtmlElement>(&self.els.document, &selector)? {
            let key = self.reveal.borrow_mut().register();
            let _ = el.set_attribute(markup::REVEAL_KEY_ATTR, &key.to_string());
            set_style(&el, "opacity", "0");
            set_style(&el, "transform", "translateY(20px)");
            set_style(&el, "transition", "opacity 0.6s ease, transform 0.6s ease");
            observer.observe(&el);
        }
        Ok(())
    }

    fn reveal_target(&self, entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
        let target = entry.target();
        let key = target
            .get_attribute(markup::REVEAL_KEY_ATTR)
            .and_then(|k| k.parse::<u32>().ok());
        let Some(key) = key else {
            return;
        };
        let mut reveal = self.reveal.borrow_mut();
        if reveal.reveal(key) {
            set_class(&target, markup::REVEALED, true);
            observer.unobserve(&target);
            debug!("revealed card {key}, {} still hidden", reveal.pending());
        }
    }
}
