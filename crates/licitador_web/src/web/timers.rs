use licitador::time::Duration;
use licitador::SiteError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// A pending `setTimeout` task. Dropping the handle cancels the task if it
/// has not run yet.
pub(super) struct Timer {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timer {
    pub(super) fn schedule<F>(window: &Window, delay: Duration, task: F) -> Result<Self, SiteError>
    where
        F: FnOnce() + 'static,
    {
        let callback: Closure<dyn FnMut()> = Closure::once(task);
        let delay_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map_err(|_| SiteError::dom("setTimeout threw"))?;
        Ok(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }

    pub(super) fn handle(&self) -> i32 {
        self.handle
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        // Harmless if the task already ran.
        self.window.clear_timeout_with_handle(self.handle);
    }
}
