use std::time::Duration;

use crate::timing::Timed;

/// Cycles an active index over `count` entries on a fixed period.
///
/// Manual selection moves the index but leaves the rotation clock alone, so
/// the next automatic step still lands on the original period boundary.
#[derive(Debug, Clone)]
pub struct Rotator {
    count: usize,
    index: usize,
    period: Duration,
    next_at: Option<Duration>,
}

impl Rotator {
    pub fn new(count: usize, period: Duration, now: Duration) -> Self {
        let next_at = (count > 1 && !period.is_zero()).then(|| now + period);
        Self {
            count,
            index: 0,
            period,
            next_at,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn advance(&mut self) {
        if self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
    }

    /// Jump straight to `index`. Out-of-range picks are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.index = index;
        true
    }

    /// Stop rotating. Nothing fires after this.
    pub fn cancel(&mut self) {
        self.next_at = None;
    }
}

impl Timed for Rotator {
    fn next_deadline(&self) -> Option<Duration> {
        self.next_at
    }

    fn poll(&mut self, now: Duration) {
        while let Some(at) = self.next_at {
            if at > now {
                break;
            }
            self.advance();
            self.next_at = Some(at + self.period);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ROTATION_PERIOD;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn single_entry_has_no_timer() {
        assert_eq!(Rotator::new(1, ROTATION_PERIOD, ms(0)).next_deadline(), None);
        assert_eq!(Rotator::new(0, ROTATION_PERIOD, ms(0)).next_deadline(), None);
    }

    #[test]
    fn three_advances_wrap_to_start() {
        let mut r = Rotator::new(3, ROTATION_PERIOD, ms(0));
        r.poll(ms(6000));
        assert_eq!(r.index(), 1);
        r.poll(ms(12000));
        r.poll(ms(18000));
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn select_then_advance_wraps() {
        let mut r = Rotator::new(3, ROTATION_PERIOD, ms(0));
        assert!(r.select(2));
        r.poll(ms(6000));
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn select_does_not_reset_clock() {
        let mut r = Rotator::new(3, ROTATION_PERIOD, ms(0));
        r.poll(ms(5000));
        r.select(2);
        assert_eq!(r.next_deadline(), Some(ms(6000)));
        r.poll(ms(6000));
        assert_eq!(r.index(), 0);
        assert_eq!(r.next_deadline(), Some(ms(12000)));
    }

    #[test]
    fn late_poll_catches_up() {
        let mut r = Rotator::new(3, ROTATION_PERIOD, ms(0));
        r.poll(ms(24500));
        assert_eq!(r.index(), 1);
        assert_eq!(r.next_deadline(), Some(ms(30000)));
    }

    #[test]
    fn out_of_range_select_ignored() {
        let mut r = Rotator::new(3, ROTATION_PERIOD, ms(0));
        assert!(!r.select(3));
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn cancelled_rotator_stays_put() {
        let mut r = Rotator::new(3, ROTATION_PERIOD, ms(0));
        r.cancel();
        r.poll(ms(60000));
        assert_eq!(r.index(), 0);
        assert_eq!(r.next_deadline(), None);
    }
}
