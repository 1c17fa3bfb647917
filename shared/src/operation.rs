use std::cell::Cell;
use std::rc::Rc;

/// Identifies one capture-and-share run started from a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationToken(u64);

/// Generation counter tied to the lifetime of the view that starts async
/// work. Clones share the same counter, so a clone moved into a future sees
/// invalidations made by the view.
#[derive(Debug, Clone, Default)]
pub struct OperationGuard {
    generation: Rc<Cell<u64>>,
}

impl OperationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> OperationToken {
        OperationToken(self.generation.get())
    }

    /// Invalidates every token handed out so far.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    pub fn is_current(&self, token: OperationToken) -> bool {
        self.generation.get() == token.0
    }
}

impl PartialEq for OperationGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.generation, &other.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_valid_until_invalidated() {
        let guard = OperationGuard::new();
        let token = guard.begin();
        assert!(guard.is_current(token));

        guard.invalidate();
        assert!(!guard.is_current(token));
        assert!(guard.is_current(guard.begin()));
    }

    #[test]
    fn test_clones_observe_invalidation() {
        let guard = OperationGuard::new();
        let in_flight = guard.clone();
        let token = in_flight.begin();

        guard.invalidate();
        assert!(!in_flight.is_current(token));
        assert_eq!(guard, in_flight);
        assert_ne!(guard, OperationGuard::new());
    }

    #[test]
    fn test_concurrent_runs_share_a_generation() {
        let guard = OperationGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(guard.is_current(first) && guard.is_current(second));
    }
}
