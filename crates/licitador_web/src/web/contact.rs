use std::rc::Rc;

use licitador::contact::{
    self, FormPayload, PreparedMessage, SubmitError, SubmitPhase, LOADING_LABEL, PREPARED_NOTICE,
};
use licitador::markup;
use licitador::time::Duration;
use licitador::toast::ToastKind;
use licitador::SiteError;
use tracing::{debug, error, info, warn};
use web_sys::{Event, FormData, HtmlButtonElement, HtmlFormElement};

use super::dom::{listen, set_class};
use super::timers::Timer;
use super::Controller;

/// Puts the submit button in its loading state and restores it on drop, so
/// every exit path of the submit handler reverts it.
struct LoadingGuard<'a> {
    button: &'a HtmlButtonElement,
    label: Option<String>,
}

impl<'a> LoadingGuard<'a> {
    fn engage(button: &'a HtmlButtonElement) -> Self {
        let label = button.text_content();
        set_class(button, markup::BUTTON_LOADING, true);
        button.set_text_content(Some(LOADING_LABEL));
        button.set_disabled(true);
        Self { button, label }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        set_class(self.button, markup::BUTTON_LOADING, false);
        self.button.set_text_content(self.label.as_deref());
        self.button.set_disabled(false);
    }
}

fn read_payload(form: &HtmlFormElement) -> Result<FormPayload, SiteError> {
    let data = FormData::new_with_form(form).map_err(|_| SiteError::dom("FormData threw"))?;
    let entries = js_sys::try_iter(&data)
        .map_err(|_| SiteError::dom("FormData is not iterable"))?
        .ok_or_else(|| SiteError::dom("FormData is not iterable"))?;

    let mut payload = FormPayload::new();
    for entry in entries {
        let entry = entry.map_err(|_| SiteError::dom("FormData entry threw"))?;
        let entry = js_sys::Array::from(&entry);
        // File inputs have no string value and are not part of the message.
        let name = entry.get(0).as_string();
        let value = entry.get(1).as_string();
        if let (Some(name), Some(value)) = (name, value) {
            payload.insert(name, value);
        }
    }
    Ok(payload)
}

impl Controller {
    fn set_phase(&self, phase: SubmitPhase) {
        let prev = std::mem::replace(&mut *self.submit_phase.borrow_mut(), phase);
        debug!("contact form: {} -> {}", prev.label(), phase.label());
    }

    pub(super) fn bind_contact_form(self: &Rc<Self>) -> Result<(), SiteError> {
        let ctl = Rc::clone(self);
        listen(&self.els.form, "submit", move |ev: Event| {
            ev.prevent_default();
            ctl.submit_contact();
        })
    }

    fn submit_contact(self: &Rc<Self>) {
        self.set_phase(SubmitPhase::Validating);
        let prepared = read_payload(&self.els.form)
            .map_err(SubmitError::from)
            .and_then(|p| contact::prepare(&p, &self.cfg));

        let prepared = match prepared {
            Ok(p) => p,
            Err(SubmitError::Validation(v)) => {
                self.set_phase(SubmitPhase::Rejected(v));
                self.notify(&v.to_string(), ToastKind::Error);
                return;
            }
            Err(e) => {
                self.fail_submission(&e);
                return;
            }
        };

        let _loading = LoadingGuard::engage(&self.els.submit);
        self.set_phase(SubmitPhase::Formatting);
        if let Err(e) = self.hand_off(prepared) {
            self.fail_submission(&e);
        }
    }

    fn hand_off(self: &Rc<Self>, prepared: PreparedMessage) -> Result<(), SubmitError> {
        debug!(
            "prepared {} chars for {}",
            prepared.text.len(),
            prepared.link.host_str().unwrap_or("")
        );

        self.notify(PREPARED_NOTICE, ToastKind::Success);
        self.els.form.reset();

        let id = self.redirects.borrow_mut().reserve();
        let ctl = Rc::downgrade(self);
        let link = prepared.link.to_string();
        let delay = Duration::from_millis(self.cfg.redirect_delay_ms as u64);
        let timer = Timer::schedule(&self.els.window, delay, move || {
            let Some(ctl) = ctl.upgrade() else {
                return;
            };
            match ctl.els.window.open_with_url_and_target(&link, "_blank") {
                Ok(Some(_)) => info!("opened messaging deep link"),
                Ok(None) => warn!("messaging deep link blocked by the browser"),
                Err(_) => error!("window.open threw for the messaging deep link"),
            }
            let done = ctl.redirects.borrow_mut().release(id);
            drop(done);
            if ctl.redirects.borrow().is_empty() {
                ctl.set_phase(SubmitPhase::Idle);
            }
        })
        .map_err(SubmitError::from)?;

        self.redirects.borrow_mut().hold(id, timer);
        self.set_phase(SubmitPhase::Redirecting);
        Ok(())
    }

    fn fail_submission(self: &Rc<Self>, e: &SubmitError) {
        error!("error sending message: {e}");
        self.notify(&e.notice(), ToastKind::Error);
        self.set_phase(SubmitPhase::Idle);
    }
}
