//! Undo/redo history over a model.

use std::collections::VecDeque;

use pf_model::Model;
use tracing::{debug, warn};

use crate::config::HistoryConfig;
use crate::error::{HistoryError, HistoryResult};
use crate::transaction::Transaction;

/// Sequences transactions against the model it owns and keeps bounded
/// undo/redo stacks.
///
/// Every mutating call takes `&mut self`, so a transaction always runs to
/// completion (or to its first failure) without interleaved edits. Share a
/// repository across threads behind a `Mutex`.
#[derive(Debug)]
pub struct Repository {
    model: Model,
    undo: VecDeque<Transaction>,
    redo: VecDeque<Transaction>,
    config: HistoryConfig,
}

impl Repository {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            config: HistoryConfig::default(),
        }
    }

    pub fn with_config(model: Model, config: HistoryConfig) -> HistoryResult<Self> {
        config.validate()?;
        Ok(Self {
            model,
            undo: VecDeque::with_capacity(config.history_limit),
            redo: VecDeque::new(),
            config,
        })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Direct access to the model. Edits made here bypass the history.
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }

    pub fn history_limit(&self) -> usize {
        self.config.history_limit
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo stack names, most recent first.
    pub fn undo_names(&self) -> Vec<&str> {
        self.undo.iter().rev().map(Transaction::name).collect()
    }

    /// Redo stack names, next to redo first.
    pub fn redo_names(&self) -> Vec<&str> {
        self.redo.iter().rev().map(Transaction::name).collect()
    }

    /// Apply a transaction and record it.
    ///
    /// On success the redo stack is cleared and the oldest undo entry is
    /// evicted if the history limit is exceeded. On failure neither stack
    /// changes; operations applied before the failing one stay applied.
    pub fn commit(&mut self, mut transaction: Transaction) -> HistoryResult<()> {
        if let Err(err) = transaction.apply(&mut self.model) {
            warn!(transaction = transaction.name(), error = %err, "commit failed");
            return Err(err);
        }
        debug!(transaction = transaction.name(), "committed");
        self.push_undo(transaction);
        self.redo.clear();
        Ok(())
    }

    /// Revert the `count` most recent transactions, one at a time.
    ///
    /// `count` must be between 1 and the undo depth. Stops at the first
    /// failing revert; transactions already reverted in this call stay on
    /// the redo stack and the failing one goes back on the undo stack.
    /// Returns the number of transactions reverted.
    ///
    /// A transaction that failed part-way is still
    /// [`TransactionState::Applied`](crate::transaction::TransactionState::Applied)
    /// even though the operations after the failing one were reverted.
    /// Undoing it again reverts those operations a second time, so callers
    /// should fix the cause (or drop the history) rather than retry blindly.
    pub fn undo(&mut self, count: i64) -> HistoryResult<usize> {
        let count = checked_count("undo", count, self.undo.len())?;
        for done in 0..count {
            let Some(mut transaction) = self.undo.pop_back() else {
                return Ok(done);
            };
            if let Err(err) = transaction.revert(&mut self.model) {
                warn!(transaction = transaction.name(), error = %err, "undo failed");
                self.undo.push_back(transaction);
                return Err(err);
            }
            debug!(transaction = transaction.name(), "undone");
            self.redo.push_back(transaction);
        }
        Ok(count)
    }

    /// Re-apply the `count` most recently undone transactions.
    ///
    /// Mirror of [`Repository::undo`]; redone transactions go back on the
    /// undo stack under the same history limit. A transaction that failed
    /// part-way stays
    /// [`TransactionState::Reverted`](crate::transaction::TransactionState::Reverted)
    /// with its earlier operations applied, and a retry applies them again.
    pub fn redo(&mut self, count: i64) -> HistoryResult<usize> {
        let count = checked_count("redo", count, self.redo.len())?;
        for done in 0..count {
            let Some(mut transaction) = self.redo.pop_back() else {
                return Ok(done);
            };
            if let Err(err) = transaction.apply(&mut self.model) {
                warn!(transaction = transaction.name(), error = %err, "redo failed");
                self.redo.push_back(transaction);
                return Err(err);
            }
            debug!(transaction = transaction.name(), "redone");
            self.push_undo(transaction);
        }
        Ok(count)
    }

    fn push_undo(&mut self, transaction: Transaction) {
        self.undo.push_back(transaction);
        while self.undo.len() > self.config.history_limit {
            if let Some(evicted) = self.undo.pop_front() {
                debug!(transaction = evicted.name(), "evicted from undo history");
            }
        }
    }
}

fn checked_count(action: &'static str, count: i64, depth: usize) -> HistoryResult<usize> {
    match usize::try_from(count) {
        Ok(n) if n >= 1 && n <= depth => Ok(n),
        _ => {
            warn!(action, count, depth, "history count out of bounds");
            Err(HistoryError::InvalidCount {
                action,
                count,
                depth,
            })
        }
    }
}
