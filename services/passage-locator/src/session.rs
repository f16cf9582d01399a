//! Generation tagging for locate sessions. Starting a session makes every
//! older one permanently stale.

use std::cell::Cell;
use std::rc::Rc;

/// Hands out monotonically increasing generations; the most recent one is the
/// only current session.
#[derive(Debug, Clone, Default)]
pub struct Generations {
    current: Rc<Cell<u64>>,
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session, superseding all earlier ones.
    pub fn begin(&self) -> Session {
        let generation = self.current.get() + 1;
        self.current.set(generation);
        Session {
            generation,
            current: Rc::clone(&self.current),
        }
    }

    /// Generation of the most recently started session, 0 if none.
    pub fn current(&self) -> u64 {
        self.current.get()
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl Session {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Must be checked right before every externally visible effect.
    pub fn is_current(&self) -> bool {
        self.current.get() == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_session_supersedes_older() {
        let gens = Generations::new();
        let a = gens.begin();
        assert!(a.is_current());
        let b = gens.begin();
        assert!(!a.is_current());
        assert!(b.is_current());
        assert_eq!(gens.current(), b.generation());
        assert!(b.generation() > a.generation());
    }

    #[test]
    fn superseded_stays_superseded() {
        let gens = Generations::new();
        let a = gens.begin();
        for _ in 0..3 {
            gens.begin();
        }
        assert!(!a.is_current());
    }
}
