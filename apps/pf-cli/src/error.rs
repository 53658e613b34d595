use pf_history::HistoryError;
use pf_model::ModelError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Element not found: {id}")]
    ElementNotFound { id: String },
}
