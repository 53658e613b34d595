//! Ordered, named batches of operations.

use std::fmt;

use chrono::{DateTime, Utc};
use pf_model::Model;
use tracing::{debug, error};

use crate::error::{HistoryError, HistoryResult};
use crate::operation::{Operation, OperationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// Constructed, nothing applied yet.
    Pending,
    Applied,
    Reverted,
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionState::Pending => f.write_str("pending"),
            TransactionState::Applied => f.write_str("applied"),
            TransactionState::Reverted => f.write_str("reverted"),
        }
    }
}

/// A named batch of operations applied in insertion order and reverted in
/// reverse order.
///
/// Both directions stop at the first failing operation and do NOT roll back
/// the operations already processed; the state is left as it was.
#[derive(Debug)]
pub struct Transaction {
    name: String,
    operations: Vec<Box<dyn Operation>>,
    timestamp: Option<DateTime<Utc>>,
    state: TransactionState,
}

impl Transaction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
            timestamp: None,
            state: TransactionState::Pending,
        }
    }

    pub fn with_operation(mut self, operation: impl Operation + 'static) -> Self {
        self.push(operation);
        self
    }

    pub fn push(&mut self, operation: impl Operation + 'static) {
        self.operations.push(Box::new(operation));
    }

    pub fn push_boxed(&mut self, operation: Box<dyn Operation>) {
        self.operations.push(operation);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Time of the last apply or revert attempt.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn operation_kinds(&self) -> Vec<OperationKind> {
        self.operations.iter().map(|op| op.kind()).collect()
    }

    /// Apply every operation in insertion order.
    ///
    /// Allowed from `Pending` and `Reverted`.
    pub fn apply(&mut self, model: &mut Model) -> HistoryResult<()> {
        if self.state == TransactionState::Applied {
            return Err(self.invalid_state("apply"));
        }
        self.timestamp = Some(Utc::now());

        for (index, operation) in self.operations.iter_mut().enumerate() {
            if !operation.apply(model) {
                error!(
                    transaction = %self.name,
                    operation = %operation.kind(),
                    index,
                    "operation failed to apply"
                );
                return Err(HistoryError::ApplyFailed {
                    transaction: self.name.clone(),
                    operation: operation.kind(),
                    index,
                });
            }
        }

        debug!(transaction = %self.name, operations = self.operations.len(), "applied");
        self.state = TransactionState::Applied;
        Ok(())
    }

    /// Revert every operation in reverse order. Allowed from `Applied` only.
    pub fn revert(&mut self, model: &mut Model) -> HistoryResult<()> {
        if self.state != TransactionState::Applied {
            return Err(self.invalid_state("revert"));
        }
        self.timestamp = Some(Utc::now());

        for (index, operation) in self.operations.iter_mut().enumerate().rev() {
            if !operation.revert(model) {
                error!(
                    transaction = %self.name,
                    operation = %operation.kind(),
                    index,
                    "operation failed to revert"
                );
                return Err(HistoryError::RevertFailed {
                    transaction: self.name.clone(),
                    operation: operation.kind(),
                    index,
                });
            }
        }

        debug!(transaction = %self.name, operations = self.operations.len(), "reverted");
        self.state = TransactionState::Reverted;
        Ok(())
    }

    fn invalid_state(&self, action: &'static str) -> HistoryError {
        HistoryError::InvalidState {
            transaction: self.name.clone(),
            action,
            state: self.state,
        }
    }
}
