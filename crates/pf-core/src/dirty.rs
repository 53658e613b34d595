//! Shared staleness flag.
//!
//! A [`DirtyFlag`] is a cheap handle onto one boolean. The model hands clones
//! of its own flag to the value records it owns (materials, sections) so that
//! their setters can mark the whole model stale without a back pointer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Default)]
pub struct DirtyFlag(Arc<AtomicBool>);

impl DirtyFlag {
    /// Create a new, clean flag.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// True when both handles point at the same flag.
    pub fn shares_with(&self, other: &DirtyFlag) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
