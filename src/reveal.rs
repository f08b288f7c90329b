//! One-shot "reveal on first sight" controller shared by every page section.

/// Ratios reported right at a threshold crossing can land a hair under it.
const RATIO_TOLERANCE: f64 = 1e-3;

pub const ABOUT_THRESHOLD: f64 = 0.2;
pub const SECTION_THRESHOLD: f64 = 0.1;

/// A registered viewport watch on a single element.
///
/// `unobserve` may be called more than once and must tolerate it.
pub trait Watch {
    fn unobserve(&mut self);
}

/// One intersection callback for the watched element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Not attached yet, or attached with no target element.
    Idle,
    Watching,
    Revealed,
    Detached,
}

pub struct RevealController<W: Watch> {
    threshold: f64,
    visible: bool,
    phase: Phase,
    watch: Option<W>,
}

impl<W: Watch> RevealController<W> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
            phase: Phase::Idle,
            watch: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_watching(&self) -> bool {
        self.phase == Phase::Watching
    }

    /// Hand over the watch created for the target element.
    ///
    /// `None` means the element wasn't found. The controller then stays
    /// hidden for good, which is not an error.
    pub fn attach(&mut self, watch: Option<W>) {
        if self.phase != Phase::Idle {
            if let Some(mut extra) = watch {
                extra.unobserve();
            }
            return;
        }
        match watch {
            Some(watch) => {
                self.watch = Some(watch);
                self.phase = Phase::Watching;
            }
            None => log::debug!("reveal target missing, staying hidden"),
        }
    }

    /// Feed one intersection callback. Returns `true` only on the call that
    /// flips the section to visible.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.phase != Phase::Watching || !self.qualifies(sample) {
            return false;
        }
        self.visible = true;
        self.phase = Phase::Revealed;
        self.release();
        log::debug!("section revealed at ratio {:.3}", sample.ratio);
        true
    }

    /// Mount-driven variant: reveal without any viewport watch.
    pub fn reveal_now(&mut self) -> bool {
        if self.visible || self.phase == Phase::Detached {
            return false;
        }
        self.visible = true;
        self.phase = Phase::Revealed;
        self.release();
        true
    }

    /// Unmount. Safe to call any number of times.
    pub fn detach(&mut self) {
        self.release();
        self.phase = Phase::Detached;
    }

    fn qualifies(&self, sample: IntersectionSample) -> bool {
        sample.is_intersecting && sample.ratio + RATIO_TOLERANCE >= self.threshold
    }

    fn release(&mut self) {
        if let Some(mut watch) = self.watch.take() {
            watch.unobserve();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct CountingWatch(Rc<Cell<usize>>);

    impl Watch for CountingWatch {
        fn unobserve(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn attached(threshold: f64) -> (RevealController<CountingWatch>, Rc<Cell<usize>>) {
        let watch = CountingWatch::default();
        let calls = watch.0.clone();
        let mut ctl = RevealController::new(threshold);
        ctl.attach(Some(watch));
        (ctl, calls)
    }

    #[test]
    fn first_qualifying_sample_reveals_and_unobserves() {
        let (mut ctl, calls) = attached(ABOUT_THRESHOLD);
        assert!(!ctl.is_visible());
        assert!(!ctl.observe(IntersectionSample::new(true, 0.05)));
        assert!(!ctl.observe(IntersectionSample::new(false, 0.0)));
        assert!(ctl.is_watching());

        assert!(ctl.observe(IntersectionSample::new(true, 0.2)));
        assert!(ctl.is_visible());
        assert!(!ctl.is_watching());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn reveal_happens_at_most_once() {
        let (mut ctl, calls) = attached(SECTION_THRESHOLD);
        let samples = [
            IntersectionSample::new(true, 0.5),
            IntersectionSample::new(false, 0.0),
            IntersectionSample::new(true, 1.0),
        ];
        let flips = samples.iter().filter(|s| ctl.observe(**s)).count();
        assert_eq!(flips, 1);
        assert!(ctl.is_visible());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn ratio_just_under_threshold_still_counts() {
        let (mut ctl, _) = attached(SECTION_THRESHOLD);
        assert!(ctl.observe(IntersectionSample::new(true, 0.0995)));
    }

    #[test]
    fn missing_target_stays_hidden() {
        let mut ctl = RevealController::<CountingWatch>::new(SECTION_THRESHOLD);
        ctl.attach(None);
        assert!(!ctl.observe(IntersectionSample::new(true, 1.0)));
        assert!(!ctl.is_visible());
        ctl.detach();
    }

    #[test]
    fn detach_before_intersection_leaves_nothing_behind() {
        let (mut ctl, calls) = attached(SECTION_THRESHOLD);
        ctl.detach();
        ctl.detach();
        assert_eq!(calls.get(), 1);

        assert!(!ctl.observe(IntersectionSample::new(true, 1.0)));
        assert!(!ctl.is_visible());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn detach_after_reveal_does_not_unobserve_again() {
        let (mut ctl, calls) = attached(SECTION_THRESHOLD);
        ctl.observe(IntersectionSample::new(true, 0.3));
        ctl.detach();
        assert_eq!(calls.get(), 1);
        assert!(ctl.is_visible());
    }

    #[test]
    fn second_attach_is_released_immediately() {
        let (mut ctl, first) = attached(SECTION_THRESHOLD);
        let extra = CountingWatch::default();
        let second = extra.0.clone();
        ctl.attach(Some(extra));
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn mount_variant_reveals_without_watch() {
        let mut ctl = RevealController::<CountingWatch>::new(0.0);
        assert!(ctl.reveal_now());
        assert!(!ctl.reveal_now());
        assert!(ctl.is_visible());
    }
}
