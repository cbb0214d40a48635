use derive_more::{Display, Error};

/// A bucket index was requested from a hash-based collection that has no buckets yet.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to calculate indices for hash-based collection with capacity 0!")]
pub struct IndexNoCap;
