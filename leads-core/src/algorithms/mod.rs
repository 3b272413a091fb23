//! This module contains pure algorithms which are not bound to the prospect domain.

pub mod geometry;
