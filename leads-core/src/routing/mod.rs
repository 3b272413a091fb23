//! This module contains logic to turn selected prospects into a visiting order.

mod navigation;
pub use self::navigation::*;

mod nearest_neighbor;
pub use self::nearest_neighbor::*;
