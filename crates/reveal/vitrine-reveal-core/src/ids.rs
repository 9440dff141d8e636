//! Identifiers and a simple allocator for registry entities.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TriggerId(pub u32);

/// Monotonic allocator for TriggerId.
/// IDs are never reused within one registry lifetime, so a stale handle can
/// never alias a newer registration.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_trigger: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_trigger(&mut self) -> TriggerId {
        let id = TriggerId(self.next_trigger);
        self.next_trigger = self.next_trigger.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_trigger(), TriggerId(0));
        assert_eq!(alloc.alloc_trigger(), TriggerId(1));
    }
}
