pub mod config;
pub mod error;
pub mod lb;
pub mod metrics;
pub mod preferred;
pub mod selector;

pub use config::{Config, SelectorConfig};
pub use error::{Result, SelectorError};
pub use metrics::Metrics;
pub use preferred::{PreferredSelector, DEFAULT_PREFERRED_HOST};
pub use selector::{Next, SelectOptions, Selector};

use lb::{RandomStrategy, RoundRobin};
use std::error::Error;
use tracing::{debug, error, warn};

/// Builds the fallback strategy named in configuration.
pub fn create_fallback(name: &str) -> Box<dyn Selector> {
    match name {
        "round_robin" | "roundrobin" => Box::new(RoundRobin::new()),
        "random" => Box::new(RandomStrategy::new()),
        unknown => {
            error!("Unknown fallback strategy: {}, falling back to round robin", unknown);
            Box::new(RoundRobin::new())
        }
    }
}

pub fn build_selector(config: &SelectorConfig) -> PreferredSelector {
    PreferredSelector::new(&config.preferred_host, Some(create_fallback(&config.fallback)))
        .with_forward_feedback(config.forward_feedback)
}

/// Resolves one node per outgoing call through the configured selector.
pub struct Router {
    selector: Box<dyn Selector>,
    metrics: Metrics,
}

impl Router {
    pub fn new(selector: Box<dyn Selector>) -> Self {
        Self {
            selector,
            metrics: Metrics::new(),
        }
    }

    pub fn next_node(&self, candidates: &[String], opts: &SelectOptions) -> Result<String> {
        self.metrics.increment_requests();

        let next = self
            .selector
            .select(candidates, opts)
            .inspect_err(|_| self.metrics.increment_errors())?;

        let node = next();
        debug!("Routing call to {} via {}", node, self.selector.name());
        Ok(node)
    }

    pub fn record(&self, address: &str, outcome: Option<&dyn Error>) -> Result<()> {
        if let Some(err) = outcome {
            warn!("Call to {} failed: {}", address, err);
            self.metrics.increment_feedback_errors();
        }
        self.selector.record(address, outcome)
    }

    pub fn reset(&self) -> Result<()> {
        self.selector.reset()
    }

    pub fn selector_name(&self) -> &str {
        self.selector.name()
    }
}
