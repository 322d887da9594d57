//! In-page anchor navigation.

/// Identifier an in-page link points at, or `None` for a bare `#` or a link
/// that is not a fragment at all.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.trim().is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Scroll position that lands the target just below the fixed header.
pub fn scroll_top_for(target_offset_top: f64, header_height: f64, margin: f64) -> f64 {
    target_offset_top - header_height - margin
}

/// What a click on an internal anchor should do. Default navigation is
/// suppressed in every case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorAction {
    ScrollTo(f64),
    Ignore,
}

/// Resolves a click given a lookup from identifier to the target's
/// `offsetTop`.
pub fn resolve_click<F>(href: &str, header_height: f64, margin: f64, offset_of: F) -> AnchorAction
where
    F: FnOnce(&str) -> Option<f64>,
{
    match fragment_target(href).and_then(offset_of) {
        Some(top) => AnchorAction::ScrollTo(scroll_top_for(top, header_height, margin)),
        None => AnchorAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fragment_identifier() {
        assert_eq!(fragment_target("#servicos"), Some("servicos"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/contato"), None);
    }

    #[test]
    fn scroll_target_subtracts_header_and_margin() {
        let action = resolve_click("#contato", 70.0, 20.0, |id| {
            assert_eq!(id, "contato");
            Some(1200.0)
        });
        assert_eq!(action, AnchorAction::ScrollTo(1110.0));
    }

    #[test]
    fn missing_target_performs_no_scroll() {
        let action = resolve_click("#nowhere", 70.0, 20.0, |_| None);
        assert_eq!(action, AnchorAction::Ignore);
    }

    #[test]
    fn bare_hash_never_queries_the_document() {
        let action = resolve_click("#", 70.0, 20.0, |_| panic!("no lookup expected"));
        assert_eq!(action, AnchorAction::Ignore);
    }
}
