use crate::time::{Duration, Instant};

/// Leading-edge rate limiter: the first call in a burst runs, further calls
/// inside the window are dropped rather than queued.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(ms as u64))
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns `true` when the caller may run now and opens a new window.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        let open = match self.last_fired {
            None => true,
            Some(t) => now.saturating_duration_since(t) >= self.window,
        };
        if open {
            self.last_fired = Some(now);
        }
        open
    }

    /// Runs `f` if the window allows it.
    pub fn run<F: FnOnce()>(&mut self, now: Instant, f: F) -> bool {
        let fired = self.try_acquire(now);
        if fired {
            f();
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_fires_immediately_and_burst_is_dropped() {
        let mut t = Throttle::from_millis(100);
        let t0 = Instant::now();
        let ms = Duration::from_millis;

        assert!(t.try_acquire(t0));
        assert!(!t.try_acquire(t0 + ms(10)));
        assert!(!t.try_acquire(t0 + ms(99)));
        assert!(t.try_acquire(t0 + ms(100)));
        assert!(!t.try_acquire(t0 + ms(150)));
        assert!(t.try_acquire(t0 + ms(230)));
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let mut t = Throttle::from_millis(100);
        let t0 = Instant::now();
        let mut runs = 0;
        for step in 0..10u64 {
            t.run(t0 + Duration::from_millis(step * 30), || runs += 1);
        }
        // Fires at 0, 120, 240.
        assert_eq!(runs, 3);
    }
}
