use std::rc::{Rc, Weak};

use licitador::markup;
use licitador::toast::{ToastId, ToastKind, ToastStep};
use licitador::SiteError;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::timers::Timer;
use super::Controller;

impl Controller {
    /// Shows `text` as the only toast on the page.
    pub(super) fn notify(self: &Rc<Self>, text: &str, kind: ToastKind) {
        if let Err(e) = self.try_notify(text, kind) {
            warn!("toast not shown: {e}");
        }
    }

    fn try_notify(self: &Rc<Self>, text: &str, kind: ToastKind) -> Result<(), SiteError> {
        let (id, evicted) = self.toast.borrow_mut().replace();
        // Cancels the previous toast's pending show/hide/remove tasks.
        drop(evicted);
        self.remove_toast_nodes();

        let node = self
            .els
            .document
            .create_element("div")
            .map_err(|_| SiteError::dom("document: create_element failed"))?;
        node.set_class_name(&kind.class_name());
        node.set_text_content(Some(text));
        node.set_attribute("style", &kind.inline_style())
            .map_err(|_| SiteError::dom("toast: set_attribute failed"))?;
        self.els
            .body
            .append_child(&node)
            .map_err(|_| SiteError::dom("body: append_child failed"))?;
        *self.toast_node.borrow_mut() = Some(node.clone());

        for (step, delay) in self.toast_timeline.steps() {
            let ctl = Rc::downgrade(self);
            let node = node.clone();
            let timer = Timer::schedule(&self.els.window, delay, move || {
                run_step(&ctl, id, &node, step);
            })?;
            debug!("toast {id:?}: {step:?} in {delay:?} (timeout {})", timer.handle());
            // A stale id hands the timer back and dropping it cancels the task.
            let _ = self.toast.borrow_mut().track(id, timer);
        }
        Ok(())
    }

    /// Detaches the tracked toast and any stray toast markup.
    fn remove_toast_nodes(&self) {
        if let Some(old) = self.toast_node.borrow_mut().take() {
            old.remove();
        }
        let strays = self
            .els
            .document
            .query_selector_all(markup::TOAST)
            .ok();
        if let Some(list) = strays {
            for i in 0..list.length() {
                if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    el.remove();
                }
            }
        }
    }
}

fn run_step(ctl: &Weak<Controller>, id: ToastId, node: &Element, step: ToastStep) {
    let Some(ctl) = ctl.upgrade() else {
        return;
    };
    if ctl.toast.borrow().current_id() != Some(id) {
        return;
    }
    match step.transform() {
        Some(transform) => {
            if let Some(el) = node.dyn_ref::<HtmlElement>() {
                let _ = el.style().set_property("transform", transform);
            }
        }
        None => {
            node.remove();
            ctl.toast_node.borrow_mut().take();
            let finished = ctl.toast.borrow_mut().finish(id);
            drop(finished);
        }
    }
}
