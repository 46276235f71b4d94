//! One-shot delayed callbacks for a cooperative, single-threaded driver.
//!
//! Nothing here is ever cancelled. Each entry carries the generation of the
//! round that scheduled it and the driver drops entries whose generation is
//! no longer current.

/// Monotonic source of generation identifiers.
#[derive(Clone, Debug, Default)]
pub struct GenerationCounter {
    last: u64,
}

impl GenerationCounter {
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DueTimer<A> {
    pub due_ms: u64,
    pub generation: u64,
    pub action: A,
}

#[derive(Clone, Debug)]
pub struct TimerQueue<A> {
    pending: Vec<DueTimer<A>>,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<A> TimerQueue<A> {
    pub fn schedule(&mut self, due_ms: u64, generation: u64, action: A) {
        self.pending.push(DueTimer {
            due_ms,
            generation,
            action,
        });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every timer due at `now_ms`, earliest first.
    /// Timers due at the same instant keep their scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Vec<DueTimer<A>> {
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|t| t.due_ms <= now_ms);
        self.pending = rest;
        due.sort_by_key(|t| t.due_ms);
        due
    }
}
