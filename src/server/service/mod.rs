//! Business logic services for the content platform.
//!
//! Services coordinate between repositories and hold the multi-step operations
//! that must stay consistent: comment insertion with the mean-rating recompute,
//! and the favorite toggle. Each multi-step operation runs inside a single
//! database transaction.

pub mod attraction;
pub mod comment;
pub mod favorite;
pub mod guide;
