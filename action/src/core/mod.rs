//! Deterministic, pure logic for the input and output contracts.
//!
//! Core modules must be free of I/O side effects. They turn raw strings into
//! typed values and typed results back into strings, and are tested in
//! isolation from any host.

pub mod outputs;
pub mod parse;
pub mod types;
