//! Error types for transaction and history handling.

use thiserror::Error;

use crate::operation::OperationKind;
use crate::transaction::TransactionState;

pub type HistoryResult<T> = Result<T, HistoryError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    /// An operation reported failure while applying. Operations before
    /// `index` stay applied.
    #[error("Transaction '{transaction}' failed to apply at operation {index} ({operation})")]
    ApplyFailed {
        transaction: String,
        operation: OperationKind,
        index: usize,
    },

    /// An operation reported failure while reverting. Operations after
    /// `index` stay reverted.
    #[error("Transaction '{transaction}' failed to revert at operation {index} ({operation})")]
    RevertFailed {
        transaction: String,
        operation: OperationKind,
        index: usize,
    },

    #[error("Invalid {action} count {count} (available: {depth})")]
    InvalidCount {
        action: &'static str,
        count: i64,
        depth: usize,
    },

    #[error("Transaction '{transaction}' cannot {action} while {state}")]
    InvalidState {
        transaction: String,
        action: &'static str,
        state: TransactionState,
    },

    #[error("Invalid history config: {what}")]
    InvalidConfig { what: &'static str },
}
