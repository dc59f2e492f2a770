use gloo_timers::callback::Interval;
use log::debug;
use yew::Callback;

use crate::config::TESTIMONIAL_INTERVAL_MS;

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Carousel position after `firings` timer ticks, starting from the first item.
#[cfg(test)]
pub fn index_after(firings: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        firings % len
    }
}

/// Fixed-interval carousel timer. Dropping it cancels the interval.
pub struct TestimonialRotator {
    _interval: Interval,
}

impl TestimonialRotator {
    pub fn start(on_advance: Callback<()>) -> Self {
        let interval = Interval::new(TESTIMONIAL_INTERVAL_MS, move || on_advance.emit(()));
        debug!("testimonial rotator started ({} ms)", TESTIMONIAL_INTERVAL_MS);
        Self { _interval: interval }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn test_repeated_advance_matches_index_after() {
        let mut index = 0;
        for firings in 1..=25 {
            index = next_index(index, 3);
            assert_eq!(index, index_after(firings, 3));
            assert_eq!(index, firings % 3);
        }
    }

    #[test]
    fn test_empty_carousel_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(index_after(7, 0), 0);
    }
}
