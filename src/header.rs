//! Header reaction to scrolling: a "scrolled" look past the first threshold
//! and slide-away when moving down past the second.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderView {
    pub scrolled: bool,
    pub hidden: bool,
}

impl HeaderView {
    /// Value for the header's `style.transform`.
    pub fn transform(self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeaderTracker {
    last_y: f64,
    scrolled_after: f64,
    hide_after: f64,
}

impl HeaderTracker {
    pub fn new(initial_y: f64, scrolled_after: f64, hide_after: f64) -> Self {
        Self {
            last_y: initial_y,
            scrolled_after,
            hide_after,
        }
    }

    #[cfg(test)]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// Evaluates both rules for this event, then records `y` whatever the
    /// direction was.
    pub fn on_scroll(&mut self, y: f64) -> HeaderView {
        let view = HeaderView {
            scrolled: y > self.scrolled_after,
            hidden: y > self.last_y && y > self.hide_after,
        };
        self.last_y = y;
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> HeaderTracker {
        HeaderTracker::new(0.0, 100.0, 200.0)
    }

    #[test]
    fn scrolled_then_back_up_never_hides_below_fold() {
        let mut t = tracker();
        let views: Vec<HeaderView> = [0.0, 150.0, 50.0].iter().map(|&y| t.on_scroll(y)).collect();

        assert!(!views[0].scrolled);
        assert!(views[1].scrolled);
        assert!(!views[2].scrolled);
        assert!(views.iter().all(|v| !v.hidden));
    }

    #[test]
    fn hides_only_when_moving_down_past_fold() {
        let mut t = tracker();
        assert!(!t.on_scroll(180.0).hidden);
        assert!(t.on_scroll(250.0).hidden);
        assert!(t.on_scroll(300.0).hidden);
        // Scrolling up past the fold shows it again.
        let up = t.on_scroll(280.0);
        assert!(!up.hidden);
        assert!(up.scrolled);
        assert_eq!(up.transform(), "translateY(0)");
    }

    #[test]
    fn last_position_updates_every_event() {
        let mut t = tracker();
        t.on_scroll(500.0);
        t.on_scroll(400.0);
        assert_eq!(t.last_y(), 400.0);
        // Same offset twice is not "down".
        assert!(!t.on_scroll(400.0).hidden);
    }
}
