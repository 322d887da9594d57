use licitador::{markup, SiteError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement, Window,
};

/// Elements the controller works with, resolved once when it binds.
pub(super) struct PageElements {
    pub(super) window: Window,
    pub(super) document: Document,
    pub(super) body: HtmlElement,
    pub(super) header: HtmlElement,
    pub(super) menu_button: HtmlElement,
    pub(super) nav: HtmlElement,
    pub(super) nav_links: Vec<HtmlElement>,
    pub(super) anchors: Vec<Element>,
    pub(super) sections: Vec<HtmlElement>,
    pub(super) form: HtmlFormElement,
    pub(super) submit: HtmlButtonElement,
}

impl PageElements {
    pub(super) fn resolve(window: Window) -> Result<Self, SiteError> {
        let document = window
            .document()
            .ok_or_else(|| SiteError::dom("no document"))?;
        let body = document.body().ok_or_else(|| SiteError::missing("body"))?;

        let form: HtmlFormElement = require(&document, markup::CONTACT_FORM)?;
        let submit = form
            .query_selector(markup::SUBMIT_BUTTON)
            .map_err(|_| SiteError::dom("form: query_selector threw"))?
            .ok_or_else(|| SiteError::missing(markup::SUBMIT_BUTTON))?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| SiteError::dom("form: submit control is not a button"))?;

        Ok(Self {
            header: require(&document, markup::HEADER)?,
            menu_button: require(&document, markup::MENU_BUTTON)?,
            nav: require(&document, markup::NAV)?,
            nav_links: query_all(&document, markup::NAV_LINKS)?,
            anchors: query_all(&document, markup::INTERNAL_ANCHORS)?,
            sections: query_all(&document, markup::SECTIONS)?,
            form,
            submit,
            body,
            document,
            window,
        })
    }

    pub(super) fn header_height(&self) -> f64 {
        self.header.offset_height() as f64
    }

    pub(super) fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

pub(super) fn require<T: JsCast>(document: &Document, selector: &str) -> Result<T, SiteError> {
    document
        .query_selector(selector)
        .map_err(|_| SiteError::dom(format!("invalid selector: {selector}")))?
        .ok_or_else(|| SiteError::missing(selector))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::dom(format!("unexpected element type for {selector}")))
}

/// Every match of `selector` that casts to `T`; others are skipped.
pub(super) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, SiteError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| SiteError::dom(format!("invalid selector: {selector}")))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub(super) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub(super) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Registers a listener for the lifetime of the page.
pub(super) fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), SiteError>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let event_name = event.to_string();
    let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| match ev.dyn_into::<E>() {
        Ok(ev) => handler(ev),
        Err(_) => tracing::debug!("{event_name}: unexpected event type"),
    }) as Box<dyn FnMut(web_sys::Event)>);

    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|_| SiteError::dom(format!("addEventListener({event}) threw")))?;
    cb.forget();
    Ok(())
}
