use licitador::images::failed_before_watch;
use licitador::markup;
use licitador::SiteError;
use tracing::{debug, warn};
use web_sys::{Document, Event, HtmlImageElement};

use super::dom::{listen, query_all, set_style};

/// Warms the browser cache. The images are never attached and load failures
/// are ignored.
pub(super) fn preload(urls: &[String]) {
    for url in urls {
        match HtmlImageElement::new() {
            Ok(img) => img.set_src(url),
            Err(_) => debug!("could not create preload image for {url}"),
        }
    }
}

fn hide_broken(img: &HtmlImageElement) {
    set_style(img, "display", "none");
    warn!("Failed to load image: {}", img.src());
}

/// Hides any page image that fails to load, including ones that failed
/// before the module was running.
pub(super) fn guard_broken(document: &Document) -> Result<(), SiteError> {
    for img in query_all::<HtmlImageElement>(document, markup::IMAGES)? {
        if failed_before_watch(img.complete(), img.natural_width(), &img.src()) {
            hide_broken(&img);
            continue;
        }
        let target = img.clone();
        listen(&img, "error", move |_: Event| hide_broken(&target))?;
    }
    Ok(())
}
