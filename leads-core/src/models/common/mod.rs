//! Common models.

mod coordinate;
pub use self::coordinate::*;
