//! Menu toggle, header scroll state, anchor scrolling, active-section
//! highlighting and the Escape shortcut.

use std::rc::Rc;

use licitador::anchor::{self, AnchorAction};
use licitador::markup;
use licitador::menu::MenuView;
use licitador::sections::{self, SectionSpan};
use licitador::time::Instant;
use licitador::SiteError;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions};

use super::dom::{listen, set_class, set_style};
use super::Controller;

impl Controller {
    fn apply_menu(&self, view: MenuView) {
        set_class(&self.els.nav, markup::NAV_OPEN, view.open);
        set_class(&self.els.menu_button, markup::MENU_BUTTON_OPEN, view.open);
        set_style(&self.els.body, "overflow", view.body_overflow());
    }

    fn close_menu(&self) {
        let closed = self.menu.borrow_mut().close();
        if let Some(view) = closed {
            self.apply_menu(view);
        }
    }

    pub(super) fn bind_menu(self: &Rc<Self>) -> Result<(), SiteError> {
        let ctl = Rc::clone(self);
        listen(&self.els.menu_button, "click", move |_: Event| {
            let view = ctl.menu.borrow_mut().toggle();
            ctl.apply_menu(view);
        })?;

        for link in &self.els.nav_links {
            let ctl = Rc::clone(self);
            listen(link, "click", move |_: Event| ctl.close_menu())?;
        }
        Ok(())
    }

    pub(super) fn bind_escape_key(self: &Rc<Self>) -> Result<(), SiteError> {
        let ctl = Rc::clone(self);
        listen(&self.els.document, "keydown", move |ev: KeyboardEvent| {
            if ev.key() == "Escape" {
                ctl.close_menu();
            }
        })
    }

    pub(super) fn bind_scroll(self: &Rc<Self>) -> Result<(), SiteError> {
        let ctl = Rc::clone(self);
        listen(&self.els.window, "scroll", move |_: Event| {
            let view = ctl.header.borrow_mut().on_scroll(ctl.els.scroll_y());
            set_class(&ctl.els.header, markup::HEADER_SCROLLED, view.scrolled);
            set_style(&ctl.els.header, "transform", view.transform());
        })?;

        debug!(
            "section highlight throttled to {:?}",
            self.highlight_throttle.borrow().window()
        );
        let ctl = Rc::clone(self);
        listen(&self.els.window, "scroll", move |_: Event| {
            ctl.highlight_throttle
                .borrow_mut()
                .run(Instant::now(), || ctl.highlight_active_section());
        })
    }

    pub(super) fn bind_anchors(self: &Rc<Self>) -> Result<(), SiteError> {
        for a in &self.els.anchors {
            let ctl = Rc::clone(self);
            let link = a.clone();
            listen(a, "click", move |ev: Event| {
                ev.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                ctl.scroll_to_fragment(&href);
            })?;
        }
        Ok(())
    }

    fn scroll_to_fragment(&self, href: &str) {
        let action = anchor::resolve_click(
            href,
            self.els.header_height(),
            self.cfg.anchor_margin_px,
            |id| {
                self.els
                    .document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    .map(|el| el.offset_top() as f64)
            },
        );
        match action {
            AnchorAction::ScrollTo(top) => {
                let opts = ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(ScrollBehavior::Smooth);
                self.els.window.scroll_to_with_scroll_to_options(&opts);
            }
            AnchorAction::Ignore => debug!("no in-page target for {href}"),
        }
    }

    pub(super) fn highlight_active_section(&self) {
        let spans: Vec<SectionSpan> = self
            .els
            .sections
            .iter()
            .map(|s| SectionSpan::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
            .collect();
        let probe = sections::probe_position(
            self.els.scroll_y(),
            self.els.header_height(),
            self.cfg.section_lookahead_px,
        );
        let active = sections::active_section(&spans, probe);

        for link in &self.els.nav_links {
            set_class(link, markup::NAV_LINK_ACTIVE, false);
            let href = link.get_attribute("href");
            if sections::link_is_active(href.as_deref(), active) {
                set_class(link, markup::NAV_LINK_ACTIVE, true);
            }
        }
    }
}
