use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Named start instants backing `time` / `time_end`.
#[derive(Debug)]
pub struct TimerRegistry {
    timers: HashMap<String, Instant>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self {
            timers: HashMap::new(),
        }
    }

    /// Starts the named timer. Starting an already-running label restarts
    /// it silently.
    pub fn start(&mut self, label: &str) {
        self.timers.insert(label.to_string(), Instant::now());
    }

    /// Stops the named timer and returns its elapsed time, or `None` when
    /// no such timer is running.
    pub fn stop(&mut self, label: &str) -> Option<Duration> {
        self.timers.remove(label).map(|started| started.elapsed())
    }

    pub fn is_running(&self, label: &str) -> bool {
        self.timers.contains_key(label)
    }

    /// Labels currently running, in no particular order.
    pub fn active(&self) -> Vec<String> {
        self.timers.keys().cloned().collect()
    }
}

impl Default for TimerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
