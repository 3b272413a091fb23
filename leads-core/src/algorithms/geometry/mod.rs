//! Contains geometry algorithms on a sphere.

mod haversine;
pub use self::haversine::*;
