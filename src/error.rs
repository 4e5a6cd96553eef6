use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectorError {
    #[error("No candidate nodes available")]
    NoCandidates,

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

pub type Result<T> = core::result::Result<T, SelectorError>;
