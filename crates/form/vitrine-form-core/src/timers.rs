//! Millisecond timer queue driven by explicit clock advances.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    due: u64,
    payload: T,
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    now: u64,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Schedule `payload` to fire `delay_ms` after the current clock.
    pub fn schedule(&mut self, delay_ms: u32, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(Pending {
            id,
            due: self.now + u64::from(delay_ms),
            payload,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        before != self.pending.len()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove the earliest timer due at or before `until` and move the clock
    /// to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerId, T)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(i, _)| i)?;
        let p = self.pending.remove(idx);
        self.now = self.now.max(p.due);
        Some((p.id, p.payload))
    }

    /// Move the clock forward to `until` without firing anything.
    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }

    /// Advance by `dt_ms` and return every payload that came due, in order.
    /// Callers that schedule from inside a callback should drive
    /// [`pop_due`](Self::pop_due) directly instead.
    pub fn advance(&mut self, dt_ms: u32) -> Vec<T> {
        let until = self.now + u64::from(dt_ms);
        let mut fired = Vec::new();
        while let Some((_, payload)) = self.pop_due(until) {
            fired.push(payload);
        }
        self.settle(until);
        fired
    }
}
