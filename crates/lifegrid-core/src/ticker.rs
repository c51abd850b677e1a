//! Repeating display schedules.
//!
//! Tickers operate on wall-clock deltas with no internal threads -- the
//! owning view calls `due()` on its refresh loop and must `stop()` its
//! tickers on teardown so no background schedule outlives the view.

use std::time::Duration;

/// A fixed-interval repeating schedule with explicit start/stop.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval_ms: u64,
    last_fire_ms: Option<u64>,
    running: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval_ms: interval.as_millis() as u64,
            last_fire_ms: None,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop and forget the last fire time; a restarted ticker fires on its
    /// first `due` call.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_fire_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the interval has elapsed. Fires immediately on the first
    /// call after `start`, then every `interval` thereafter.
    pub fn due(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        match self.last_fire_ms {
            None => {
                self.last_fire_ms = Some(now_ms);
                true
            }
            Some(last) if now_ms.saturating_sub(last) >= self.interval_ms => {
                self.last_fire_ms = Some(now_ms);
                true
            }
            _ => false,
        }
    }
}

/// Reality-check one-liners rotated under the countdown.
pub const FACTS: [&str; 12] = [
    "DECAY IS CONSTANT.",
    "YOU ARE DYING.",
    "4,000 WEEKS TOTAL.",
    "SLEEP TAKES 26 YEARS.",
    "SCREENS TAKE 11 YEARS.",
    "NO REFUNDS ON TIME.",
    "MEMENTO MORI.",
    "THE CLOCK NEVER STOPS.",
    "YOUTH IS FINITE.",
    "ENTROPY WINS.",
    "VOID AWAITS.",
    "EXECUTE LIFE.",
];

/// Rotates through [`FACTS`] on a fixed interval.
#[derive(Debug, Clone)]
pub struct FactTicker {
    ticker: Ticker,
    index: usize,
}

impl FactTicker {
    pub fn new(interval: Duration) -> Self {
        let mut ticker = Ticker::new(interval);
        ticker.start();
        Self { ticker, index: 0 }
    }

    pub fn current(&self) -> &'static str {
        FACTS[self.index]
    }

    /// Advance to the next fact when the interval has elapsed.
    pub fn advance_if_due(&mut self, now_ms: u64) -> &'static str {
        if self.ticker.due(now_ms) {
            self.index = (self.index + 1) % FACTS.len();
        }
        self.current()
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
    }
}
