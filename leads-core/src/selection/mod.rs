//! This module contains a selection of prospects chosen for a route.
//!
//! A [`SelectionSet`] is the single shared source of truth. Views which let the user edit the selection
//! (a filter dialog, a plain list, a single marker detail) work on their own [`WorkingSelection`] seeded
//! from a snapshot and publish it with `replace`, so there is no hidden aliasing between views. The last
//! published selection wins.

mod selection_set;
pub use self::selection_set::*;

mod shared;
pub use self::shared::*;

mod working;
pub use self::working::*;
