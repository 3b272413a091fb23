//! A collection of models to represent prospects, coordinates and routes.

pub mod common;
pub mod problem;
pub mod solution;
