//! Active-section highlighting for the navigation.

/// Vertical extent of a page section, as read from `offsetTop`/`offsetHeight`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Point compared against the sections: a little below the fixed header.
pub fn probe_position(scroll_y: f64, header_height: f64, lookahead: f64) -> f64 {
    scroll_y + header_height + lookahead
}

/// Section under `probe`. Sections are checked in document order and the
/// last match wins when spans overlap.
pub fn active_section(sections: &[SectionSpan], probe: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// Whether a nav link with this `href` should carry the active class.
pub fn link_is_active(href: Option<&str>, active: Option<&str>) -> bool {
    match (href, active) {
        (Some(href), Some(id)) => href.strip_prefix('#') == Some(id),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("inicio", 0.0, 600.0),
            SectionSpan::new("servicos", 600.0, 800.0),
            SectionSpan::new("contato", 1400.0, 500.0),
        ]
    }

    #[test]
    fn probe_is_offset_by_header_and_lookahead() {
        let sections = page();
        // 480 + 70 + 50 = 600 lands on the start of "servicos".
        let probe = probe_position(480.0, 70.0, 50.0);
        assert_eq!(active_section(&sections, probe), Some("servicos"));
        assert_eq!(active_section(&sections, 599.0), Some("inicio"));
    }

    #[test]
    fn overlapping_spans_pick_the_last_in_document_order() {
        let mut sections = page();
        sections.push(SectionSpan::new("destaque", 500.0, 300.0));
        assert_eq!(active_section(&sections, 650.0), Some("destaque"));
    }

    #[test]
    fn past_the_last_section_nothing_is_active() {
        assert_eq!(active_section(&page(), 5000.0), None);
    }

    #[test]
    fn link_matches_only_its_own_fragment() {
        assert!(link_is_active(Some("#contato"), Some("contato")));
        assert!(!link_is_active(Some("#servicos"), Some("contato")));
        assert!(!link_is_active(Some("contato"), Some("contato")));
        assert!(!link_is_active(Some("#"), None));
        assert!(!link_is_active(None, Some("contato")));
    }
}
