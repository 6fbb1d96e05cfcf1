use std::time::{Duration, Instant};

/// Elapsed play time of a session. Pausing freezes the reading until resumed.
#[derive(Debug, Clone)]
pub struct SessionClock {
    /// Time accumulated before the current running stretch
    accumulated: Duration,
    /// Start of the current running stretch, `None` while paused
    resumed_at: Option<Instant>,
}

impl SessionClock {
    /// A clock that starts running immediately.
    pub fn start() -> Self {
        SessionClock {
            accumulated: Duration::ZERO,
            resumed_at: Some(Instant::now()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.resumed_at.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn pause(&mut self) {
        if let Some(resumed_at) = self.resumed_at.take() {
            self.accumulated += resumed_at.elapsed();
        }
    }

    pub fn resume(&mut self) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(Instant::now());
        }
    }

    /// Reset to zero and start running again.
    pub fn restart(&mut self) {
        *self = SessionClock::start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_freezes_reading() {
        let mut clock = SessionClock::start();
        std::thread::sleep(Duration::from_millis(5));
        clock.pause();
        assert!(!clock.is_running());
        let frozen = clock.elapsed();
        assert!(frozen >= Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.elapsed(), frozen);

        // Pausing twice keeps the reading
        clock.pause();
        assert_eq!(clock.elapsed(), frozen);
    }

    #[test]
    fn test_resume_keeps_accumulated_time() {
        let mut clock = SessionClock::start();
        std::thread::sleep(Duration::from_millis(5));
        clock.pause();
        let frozen = clock.elapsed();
        clock.resume();
        assert!(clock.is_running());
        std::thread::sleep(Duration::from_millis(5));
        assert!(clock.elapsed() >= frozen + Duration::from_millis(5));
    }

    #[test]
    fn test_restart_resets() {
        let mut clock = SessionClock::start();
        std::thread::sleep(Duration::from_millis(20));
        clock.pause();
        clock.restart();
        assert!(clock.is_running());
        assert!(clock.elapsed() < Duration::from_millis(20));
    }
}
