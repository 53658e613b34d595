use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PfError {
    #[error("Invalid identifier: {id:?} ({reason})")]
    InvalidId { id: String, reason: &'static str },
}
