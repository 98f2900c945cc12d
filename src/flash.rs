//! Short-lived values that disappear after a fixed delay.

use std::time::{Duration, Instant};

/// A value visible until its deadline passes. Triggering again replaces
/// both the value and the deadline.
#[derive(Debug, Clone)]
pub struct Flash<T> {
    duration: Duration,
    active: Option<(T, Instant)>,
}

impl<T> Flash<T> {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    pub fn trigger(&mut self, value: T, now: Instant) {
        self.active = Some((value, now + self.duration));
    }

    pub fn current(&self, now: Instant) -> Option<&T> {
        match &self.active {
            Some((value, deadline)) if now < *deadline => Some(value),
            _ => None,
        }
    }

    /// Drop the value if its deadline has passed. Returns true when
    /// something was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.active {
            Some((_, deadline)) if now >= deadline => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.active.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_visible_until_deadline() {
        let start = Instant::now();
        let mut flash = Flash::new(500 * MS);

        assert_eq!(flash.current(start), None);
        flash.trigger(true, start);

        assert_eq!(flash.current(start + 499 * MS), Some(&true));
        assert_eq!(flash.current(start + 500 * MS), None);
        assert!(!flash.expire(start + 100 * MS));
        assert!(flash.expire(start + 500 * MS));
        assert_eq!(flash.deadline(), None);
    }

    #[test]
    fn test_retrigger_replaces_pending() {
        let start = Instant::now();
        let mut flash = Flash::new(500 * MS);

        flash.trigger(true, start);
        flash.trigger(false, start + 400 * MS);

        // The first deadline no longer applies.
        assert!(!flash.expire(start + 600 * MS));
        assert_eq!(flash.current(start + 600 * MS), Some(&false));
        assert_eq!(flash.deadline(), Some(start + 900 * MS));
        assert!(flash.expire(start + 900 * MS));
    }

    #[test]
    fn test_clear() {
        let start = Instant::now();
        let mut flash = Flash::new(2000 * MS);

        flash.trigger("#FF0000", start);
        flash.clear();
        assert_eq!(flash.current(start), None);
    }
}
