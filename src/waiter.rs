use std::{
    cell::Cell,
    thread,
    time::{Duration, Instant},
};

/// Spaces outbound requests at least `interval` apart.
///
/// The first call never blocks. Later calls sleep only for whatever part of the
/// interval has not already elapsed since the previous call.
#[derive(Debug, Default)]
pub struct Waiter {
    last: Cell<Option<Instant>>,
    interval: Option<Duration>,
}

impl Waiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            last: Cell::new(None),
            interval: Some(interval).filter(|interval| !interval.is_zero()),
        }
    }

    pub fn wait(&self) {
        if let (Some(interval), Some(last)) = (self.interval, self.last.get()) {
            if let Some(remaining) = interval.checked_sub(last.elapsed()) {
                tracing::debug!(?remaining, "rate limited");
                thread::sleep(remaining);
            }
        }
        self.last.set(Some(Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::Waiter;

    #[test]
    fn first_wait_is_free() {
        let waiter = Waiter::new(Duration::from_secs(5));
        let start = Instant::now();
        waiter.wait();
        assert!(start.elapsed() < Duration::from_secs(1));

        let Waiter { last, .. } = waiter;
        assert!(last.into_inner().is_some());
    }

    #[test]
    fn second_wait_blocks_for_interval() {
        let waiter = Waiter::new(Duration::from_millis(50));
        waiter.wait();
        let start = Instant::now();
        waiter.wait();
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn zero_interval_never_blocks() {
        let waiter = Waiter::new(Duration::ZERO);
        assert!(waiter.interval.is_none());
        waiter.wait();
        waiter.wait();
    }
}
