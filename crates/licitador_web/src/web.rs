use std::cell::RefCell;
use std::rc::Rc;

use licitador::config::CONFIG_ELEMENT_ID;
use licitador::contact::{PendingRedirects, SubmitPhase};
use licitador::header::HeaderTracker;
use licitador::menu::MenuState;
use licitador::reveal::RevealSet;
use licitador::throttle::Throttle;
use licitador::toast::{ToastSlot, ToastTimeline};
use licitador::{markup, SiteConfig, SiteError};
use tracing::{error, info, warn};
use web_sys::{Element, Event, Window};

mod contact;
mod dom;
mod images;
mod logging;
mod navigation;
mod reveal;
mod timers;
mod toast;

use dom::{listen, set_class, PageElements};
use timers::Timer;

/// Binds the page behaviors once the document has been parsed.
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let (cfg, cfg_error) = load_config(&window);
    logging::init(&cfg.log_level);
    if let Some(e) = cfg_error {
        warn!("ignoring site config override: {e}");
    }

    let Some(document) = window.document() else {
        error!("no document to bind to");
        return;
    };
    if document.ready_state() == "loading" {
        let mut pending = Some(cfg);
        let res = listen(&document, "DOMContentLoaded", move |_: Event| {
            if let Some(cfg) = pending.take() {
                boot(window.clone(), cfg);
            }
        });
        if let Err(e) = res {
            error!("failed to wait for DOMContentLoaded: {e}");
        }
    } else {
        boot(window, cfg);
    }
}

fn boot(window: Window, cfg: SiteConfig) {
    let ctl = match Controller::new(window, cfg) {
        Ok(ctl) => ctl,
        Err(e) => {
            error!("page behaviors disabled: {e}");
            return;
        }
    };
    // Listeners registered before a failure stay active.
    if let Err(e) = ctl.bind() {
        error!("page behaviors partially bound: {e}");
        return;
    }
    for line in &ctl.cfg.contact_channels {
        info!("{line}");
    }
}

/// Defaults, overridden by the JSON body of `#site-config` when present.
fn load_config(window: &Window) -> (SiteConfig, Option<SiteError>) {
    let raw = window
        .document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match raw {
        None => (SiteConfig::default(), None),
        Some(raw) => match SiteConfig::from_json(&raw) {
            Ok(cfg) => (cfg, None),
            Err(e) => (SiteConfig::default(), Some(e)),
        },
    }
}

/// Owner of all behavior state on the page. Handlers hold an `Rc` (listeners)
/// or a `Weak` (timers) to it; each `RefCell` is only borrowed for the
/// duration of one state update.
struct Controller {
    cfg: SiteConfig,
    els: PageElements,
    toast_timeline: ToastTimeline,
    menu: RefCell<MenuState>,
    header: RefCell<HeaderTracker>,
    highlight_throttle: RefCell<Throttle>,
    toast: RefCell<ToastSlot<Timer>>,
    toast_node: RefCell<Option<Element>>,
    reveal: RefCell<RevealSet>,
    submit_phase: RefCell<SubmitPhase>,
    redirects: RefCell<PendingRedirects<Timer>>,
}

impl Controller {
    /// Resolves the page elements. Nothing is registered yet, so a failure
    /// here leaves the page untouched.
    fn new(window: Window, cfg: SiteConfig) -> Result<Rc<Self>, SiteError> {
        let els = PageElements::resolve(window)?;
        let header = HeaderTracker::new(
            els.scroll_y(),
            cfg.header_scrolled_after_px,
            cfg.header_hide_after_px,
        );

        Ok(Rc::new(Self {
            toast_timeline: ToastTimeline::from_config(&cfg),
            menu: RefCell::new(MenuState::new()),
            header: RefCell::new(header),
            highlight_throttle: RefCell::new(Throttle::from_millis(cfg.highlight_throttle_ms)),
            toast: RefCell::new(ToastSlot::new()),
            toast_node: RefCell::new(None),
            reveal: RefCell::new(RevealSet::new()),
            submit_phase: RefCell::new(SubmitPhase::Idle),
            redirects: RefCell::new(PendingRedirects::new()),
            els,
            cfg,
        }))
    }

    fn bind(self: &Rc<Self>) -> Result<(), SiteError> {
        self.inject_stylesheet()?;
        self.bind_menu()?;
        self.bind_scroll()?;
        self.bind_anchors()?;
        self.bind_contact_form()?;
        self.bind_escape_key()?;
        self.bind_print_mode()?;
        self.highlight_active_section();

        // Optional enhancements: a failure here leaves the rest working.
        if let Err(e) = self.init_reveal() {
            warn!("fade-in disabled: {e}");
        }
        images::preload(&self.cfg.preload_images);
        if let Err(e) = images::guard_broken(&self.els.document) {
            warn!("broken-image guard disabled: {e}");
        }
        Ok(())
    }

    fn inject_stylesheet(&self) -> Result<(), SiteError> {
        let style = self
            .els
            .document
            .create_element("style")
            .map_err(|_| SiteError::dom("document: create_element failed"))?;
        style.set_text_content(Some(markup::BEHAVIOR_STYLESHEET));
        let head = self
            .els
            .document
            .head()
            .ok_or_else(|| SiteError::missing("head"))?;
        head.append_child(&style)
            .map_err(|_| SiteError::dom("head: append_child failed"))?;
        Ok(())
    }

    fn bind_print_mode(self: &Rc<Self>) -> Result<(), SiteError> {
        for (event, printing) in [("beforeprint", true), ("afterprint", false)] {
            let ctl = Rc::clone(self);
            listen(&self.els.window, event, move |_: Event| {
                set_class(&ctl.els.body, markup::PRINTING, printing);
            })?;
        }
        Ok(())
    }
}
