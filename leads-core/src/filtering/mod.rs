//! This module contains logic to narrow a prospect list down to the ones around a reference location.

mod criteria;
pub use self::criteria::*;

mod radius;
pub use self::radius::*;
