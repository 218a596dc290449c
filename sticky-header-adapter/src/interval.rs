/// A fixed-cadence timer driven by host timestamps.
///
/// This mirrors `setInterval`: it fires at most once per call to [`Interval::due`], and when the
/// host falls behind by several periods it fires once and realigns to the period grid instead of
/// bursting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub period_ms: u64,
    pub next_due_ms: u64,
}

impl Interval {
    /// Starts an interval whose first firing is one period after `now_ms`.
    pub fn new(period_ms: u64, now_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_due_ms: now_ms.saturating_add(period_ms),
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.next_due_ms
    }

    /// Returns `true` when a period boundary was reached, and schedules the next one.
    pub fn due(&mut self, now_ms: u64) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        let behind = now_ms - self.next_due_ms;
        let skipped = behind / self.period_ms;
        self.next_due_ms = self
            .next_due_ms
            .saturating_add(self.period_ms.saturating_mul(skipped.saturating_add(1)));
        true
    }

    /// Restarts the cadence from `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.next_due_ms = now_ms.saturating_add(self.period_ms);
    }
}
