use crate::error::{Result, SelectorError};
use crate::selector::{constant, Next, SelectOptions, Selector};
use rand::Rng;
use std::error::Error;

pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for RandomStrategy {
    fn select(&self, candidates: &[String], _opts: &SelectOptions) -> Result<Next> {
        if candidates.is_empty() {
            return Err(SelectorError::NoCandidates);
        }

        let mut rng = rand::thread_rng();
        let index = rng.gen_range(0..candidates.len());
        Ok(constant(candidates[index].clone()))
    }

    fn record(&self, _address: &str, _outcome: Option<&dyn Error>) -> Result<()> {
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "random"
    }
}
