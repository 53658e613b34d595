//! History configuration.

use serde::{Deserialize, Serialize};

use crate::error::{HistoryError, HistoryResult};

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of transactions kept on the undo stack.
    pub history_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl HistoryConfig {
    pub fn with_history_limit(history_limit: usize) -> Self {
        Self { history_limit }
    }

    pub fn validate(&self) -> HistoryResult<()> {
        if self.history_limit == 0 {
            return Err(HistoryError::InvalidConfig {
                what: "history_limit must be at least 1",
            });
        }
        Ok(())
    }
}
