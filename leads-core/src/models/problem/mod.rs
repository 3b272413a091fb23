//! Problem domain models.

mod prospects;
pub use self::prospects::*;
