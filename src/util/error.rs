use derive_more::{Display, Error};

/// An index was used that lies outside of a collection's bounds.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time of access.
    pub len: usize,
}

/// A length or capacity calculation exceeded `usize::MAX`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
