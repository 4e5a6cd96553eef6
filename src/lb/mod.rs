mod random;
mod round_robin;

pub use random::RandomStrategy;
pub use round_robin::RoundRobin;
