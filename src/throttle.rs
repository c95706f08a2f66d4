use std::thread;
use std::time::{Duration, Instant};

/// Fixed-interval pacer for API calls. Not a scheduler: `wait()` just sleeps
/// out whatever remains of the interval since the previous call. The first
/// call never sleeps.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    pub fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}
