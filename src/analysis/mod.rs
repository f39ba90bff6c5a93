//! Statistics over blog snapshots.

pub mod aggregator;

pub use aggregator::*;
