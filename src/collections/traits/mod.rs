//! Traits shared between collections, along with the generic code written against them.

pub mod tree;

pub(crate) use tree::*;
