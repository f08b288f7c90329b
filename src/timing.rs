use std::time::Duration;

/// Simulated round trip of the contact form transport.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1500);
/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);
pub const ROTATION_PERIOD: Duration = Duration::from_millis(6000);
/// Pause between a skills reveal and the first staged item.
pub const STAGGER_DELAY: Duration = Duration::from_millis(300);
pub const STAGGER_STEP: Duration = Duration::from_millis(100);
pub const CARD_DELAY_BASE: Duration = Duration::from_millis(200);
pub const CARD_DELAY_STEP: Duration = Duration::from_millis(100);

/// State that advances on its own clock.
///
/// Times are offsets from an arbitrary page origin. The driver asks for the
/// next deadline, waits until then and calls [`Timed::poll`] with the current
/// offset. Polling early or late is fine; every due step is applied in order.
pub trait Timed {
    fn next_deadline(&self) -> Option<Duration>;
    fn poll(&mut self, now: Duration);
}

/// Transition delay for the project card at `index` in the filtered grid.
pub fn card_delay(index: usize) -> Duration {
    CARD_DELAY_BASE + CARD_DELAY_STEP * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_delay_grows_per_index() {
        assert_eq!(card_delay(0), Duration::from_millis(200));
        assert_eq!(card_delay(3), Duration::from_millis(500));
    }
}
