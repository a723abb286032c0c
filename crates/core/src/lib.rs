//! Domain vocabulary and pure logic for the turno de oficio roster.
//!
//! This crate has no internal dependencies so the store, the HTTP layer and
//! any future tooling can share it.

pub mod error;
pub mod roster;
pub mod rotation;
pub mod statistics;
pub mod time_span;
pub mod types;
