//! A module containing [`HashMap`] and associated types.
//!
//! Currently, the only other included types are for iteration, providing owned and borrowed
//! iteration over entries, keys or values in a map.
//!
//! As a note, there is no way to mutate keys in place because mutating the keys of a HashMap would
//! move them to the wrong bucket.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod error;
mod hash_map;
mod iter;
mod tests;

pub use error::*;
pub use hash_map::*;
pub use iter::*;
