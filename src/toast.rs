//! Toast notifications.
//!
//! At most one toast is on the page. Each toast owns the handles of its
//! pending show/hide/remove tasks; replacing a toast hands the old one back to
//! the caller so those tasks can be cancelled before the new node is attached.

use crate::config::SiteConfig;
use crate::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    pub fn class_name(self) -> String {
        format!("message-toast message-toast--{}", self.label())
    }

    fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "var(--color-success)",
            ToastKind::Error => "var(--color-error)",
            ToastKind::Info => "var(--color-info)",
        }
    }

    /// Inline style for a freshly created toast. It starts off-screen to the
    /// right; `ToastStep::Show` slides it in.
    pub fn inline_style(self) -> String {
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 16px 20px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
             z-index: 1001; font-weight: 500; max-width: 350px; word-wrap: break-word; \
             transform: {}; transition: transform 0.3s ease;",
            self.background(),
            ToastStep::Hide.transform().unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStep {
    Show,
    Hide,
    Remove,
}

impl ToastStep {
    pub fn transform(self) -> Option<&'static str> {
        match self {
            ToastStep::Show => Some("translateX(0)"),
            ToastStep::Hide => Some("translateX(100%)"),
            ToastStep::Remove => None,
        }
    }
}

/// When each step runs, measured from the toast's creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimeline {
    pub enter_delay: Duration,
    pub display: Duration,
    pub exit: Duration,
}

impl ToastTimeline {
    pub fn from_config(cfg: &SiteConfig) -> Self {
        Self {
            enter_delay: Duration::from_millis(cfg.toast_enter_delay_ms as u64),
            display: Duration::from_millis(cfg.toast_display_ms as u64),
            exit: Duration::from_millis(cfg.toast_exit_ms as u64),
        }
    }

    pub fn steps(&self) -> [(ToastStep, Duration); 3] {
        [
            (ToastStep::Show, self.enter_delay),
            (ToastStep::Hide, self.display),
            (ToastStep::Remove, self.display + self.exit),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// The toast currently attached, with the handles of its pending tasks.
#[derive(Debug)]
pub struct ActiveToast<H> {
    pub id: ToastId,
    pub tasks: Vec<H>,
}

/// Single toast slot. `H` is whatever handle cancels a scheduled task
/// (a browser timeout in the web crate).
#[derive(Debug)]
pub struct ToastSlot<H> {
    current: Option<ActiveToast<H>>,
    next_id: u64,
}

impl<H> Default for ToastSlot<H> {
    fn default() -> Self {
        Self {
            current: None,
            next_id: 0,
        }
    }
}

impl<H> ToastSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_id(&self) -> Option<ToastId> {
        self.current.as_ref().map(|t| t.id)
    }

    #[cfg(test)]
    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    /// Reserves the slot for a new toast. The evicted toast, if any, is
    /// returned so its node can be removed and its tasks cancelled.
    pub fn replace(&mut self) -> (ToastId, Option<ActiveToast<H>>) {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let evicted = self.current.replace(ActiveToast {
            id,
            tasks: Vec::new(),
        });
        (id, evicted)
    }

    /// Records a pending task for toast `id`. A task for a toast that is no
    /// longer current is handed back to be cancelled.
    pub fn track(&mut self, id: ToastId, task: H) -> Result<(), H> {
        match self.current.as_mut() {
            Some(t) if t.id == id => {
                t.tasks.push(task);
                Ok(())
            }
            _ => Err(task),
        }
    }

    /// Frees the slot once toast `id` has been removed. Stale ids are ignored.
    pub fn finish(&mut self, id: ToastId) -> Option<ActiveToast<H>> {
        if self.current_id() == Some(id) {
            self.current.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_matches_defaults() {
        let t = ToastTimeline::from_config(&SiteConfig::default());
        let steps = t.steps();
        assert_eq!(steps[0], (ToastStep::Show, Duration::from_millis(100)));
        assert_eq!(steps[1], (ToastStep::Hide, Duration::from_millis(4000)));
        assert_eq!(steps[2], (ToastStep::Remove, Duration::from_millis(4300)));
    }

    #[test]
    fn second_toast_evicts_first_with_its_tasks() {
        let mut slot: ToastSlot<&'static str> = ToastSlot::new();
        let (first, evicted) = slot.replace();
        assert!(evicted.is_none());
        slot.track(first, "show-1").unwrap();
        slot.track(first, "remove-1").unwrap();

        // Second notify well inside the first toast's lifetime.
        let (second, evicted) = slot.replace();
        let evicted = evicted.unwrap();
        assert_eq!(evicted.id, first);
        assert_eq!(evicted.tasks, vec!["show-1", "remove-1"]);
        assert_eq!(slot.current_id(), Some(second));
    }

    #[test]
    fn stale_ids_cannot_touch_the_current_toast() {
        let mut slot: ToastSlot<u32> = ToastSlot::new();
        let (first, _) = slot.replace();
        let (second, _) = slot.replace();

        assert_eq!(slot.track(first, 7), Err(7));
        assert!(slot.finish(first).is_none());
        assert_eq!(slot.current_id(), Some(second));

        let done = slot.finish(second).unwrap();
        assert_eq!(done.id, second);
        assert!(!slot.is_occupied());
    }

    #[test]
    fn style_and_class_follow_kind() {
        assert_eq!(ToastKind::default(), ToastKind::Info);
        assert_eq!(
            ToastKind::Error.class_name(),
            "message-toast message-toast--error"
        );
        let style = ToastKind::Success.inline_style();
        assert!(style.contains("var(--color-success)"));
        assert!(style.contains("transform: translateX(100%)"));
    }
}
