//! Mobile navigation menu state.
//!
//! The controller owns the single `MenuState`; every handler that can open or
//! close the menu goes through it and applies the returned `MenuView`, so the
//! flag and the nav's visual state cannot drift apart.

/// Visual state the binding layer applies to the nav, the toggle button and
/// the body's scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub open: bool,
}

impl MenuView {
    /// Value for `body.style.overflow`.
    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> MenuView {
        MenuView { open: self.open }
    }

    /// Toggle button click.
    pub fn toggle(&mut self) -> MenuView {
        self.open = !self.open;
        self.view()
    }

    /// Forced close from a nav link click or the Escape key. Returns `None`
    /// when the menu was already closed and nothing needs to change.
    pub fn close(&mut self) -> Option<MenuView> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_view_follows_flag() {
        let mut m = MenuState::new();
        for _ in 0..5 {
            let view = m.toggle();
            assert_eq!(view.open, m.is_open());
        }
        assert!(m.is_open());
        assert_eq!(m.view().body_overflow(), "hidden");
    }

    #[test]
    fn close_is_a_noop_when_already_closed() {
        let mut m = MenuState::new();
        assert_eq!(m.close(), None);
        assert!(!m.is_open());
    }

    #[test]
    fn close_forces_closed_without_flipping_back() {
        let mut m = MenuState::new();
        m.toggle();
        let view = m.close().unwrap();
        assert!(!view.open);
        assert_eq!(view.body_overflow(), "");
        assert_eq!(m.close(), None);
        assert!(!m.is_open());
    }

    #[test]
    fn mixed_sequences_keep_view_consistent() {
        let mut m = MenuState::new();
        let ops = [0u8, 1, 0, 0, 1, 1, 0, 1, 0];
        for op in ops {
            let view = match op {
                0 => m.toggle(),
                _ => m.close().unwrap_or_else(|| m.view()),
            };
            assert_eq!(view, m.view());
        }
    }
}
