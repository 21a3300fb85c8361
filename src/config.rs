//! Configuration loader and schema types.
//!
//! This module exposes the settings schema for library scanning and crate
//! generation, and helpers to load it from disk and the environment.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
