//! pf-core: stable foundation for planeframe.
//!
//! Contains:
//! - plane (2D x/z coordinates in the frame plane)
//! - numeric (Real + tolerances + float helpers)
//! - ids (entity identifier generation)
//! - dirty (shared write-through staleness flag)
//! - error (shared error types)

pub mod dirty;
pub mod error;
pub mod ids;
pub mod numeric;
pub mod plane;

// Re-exports: nice ergonomics for downstream crates
pub use dirty::DirtyFlag;
pub use error::{PfError, PfResult};
pub use ids::*;
pub use numeric::*;
pub use plane::Vec2Plane;
