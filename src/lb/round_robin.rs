use crate::error::{Result, SelectorError};
use crate::selector::{constant, Next, SelectOptions, Selector};
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct RoundRobin {
    current: AtomicUsize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self {
            current: AtomicUsize::new(0),
        }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for RoundRobin {
    fn select(&self, candidates: &[String], _opts: &SelectOptions) -> Result<Next> {
        if candidates.is_empty() {
            return Err(SelectorError::NoCandidates);
        }

        let current = self.current.fetch_add(1, Ordering::SeqCst);
        let index = current % candidates.len();
        Ok(constant(candidates[index].clone()))
    }

    fn record(&self, _address: &str, _outcome: Option<&dyn Error>) -> Result<()> {
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        self.current.store(0, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        "roundrobin"
    }
}
