//! Selector that pins traffic to one preferred host when it is listed.
//!
//! The preferred host is matched as a plain string prefix over `host:port`
//! candidates. A value without a port therefore matches every port on that
//! host, and a value such as `10.0.0.1` also matches `10.0.0.100:9000`.

use crate::error::Result;
use crate::lb::RoundRobin;
use crate::selector::{constant, Next, SelectOptions, Selector};
use std::error::Error;
use tracing::{info, warn};

pub const DEFAULT_PREFERRED_HOST: &str = "127.0.0.1";

pub struct PreferredSelector {
    preferred_prefix: String,
    fallback: Box<dyn Selector>,
    forward_feedback: bool,
}

impl PreferredSelector {
    /// An empty `preferred_host` means [`DEFAULT_PREFERRED_HOST`]; a missing
    /// `fallback` means a fresh [`RoundRobin`].
    pub fn new(preferred_host: &str, fallback: Option<Box<dyn Selector>>) -> Self {
        let preferred_prefix = if preferred_host.is_empty() {
            DEFAULT_PREFERRED_HOST.to_string()
        } else {
            preferred_host.to_string()
        };

        Self {
            preferred_prefix,
            fallback: fallback.unwrap_or_else(|| Box::new(RoundRobin::new())),
            forward_feedback: false,
        }
    }

    /// Forward `record` and `reset` to the fallback instead of dropping them.
    pub fn with_forward_feedback(mut self, forward: bool) -> Self {
        self.forward_feedback = forward;
        self
    }

    pub fn preferred_prefix(&self) -> &str {
        &self.preferred_prefix
    }

    pub fn fallback(&self) -> &dyn Selector {
        self.fallback.as_ref()
    }

    fn find_preferred<'a>(&self, candidates: &'a [String]) -> Option<&'a String> {
        candidates
            .iter()
            .find(|addr| addr.starts_with(&self.preferred_prefix))
    }
}

impl Selector for PreferredSelector {
    fn select(&self, candidates: &[String], opts: &SelectOptions) -> Result<Next> {
        match self.find_preferred(candidates) {
            Some(node) => {
                info!("Preferred peer {} selected", node);
                Ok(constant(node.clone()))
            }
            None => {
                warn!(
                    "Preferred host {} not found; falling back to {}",
                    self.preferred_prefix,
                    self.fallback.name()
                );
                self.fallback.select(candidates, opts)
            }
        }
    }

    fn record(&self, address: &str, outcome: Option<&dyn Error>) -> Result<()> {
        if self.forward_feedback {
            return self.fallback.record(address, outcome);
        }
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        if self.forward_feedback {
            return self.fallback.reset();
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "preferred"
    }
}
