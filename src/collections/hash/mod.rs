//! Hash-based collection types. Both are built on a table of buckets where colliding keys are
//! chained together inside their bucket, rather than probing for another free bucket.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
