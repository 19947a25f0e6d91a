//! Input and output contract of a CI step that transfers files to and from an
//! S3-compatible object storage bucket.
//!
//! The transfer itself happens elsewhere. This crate turns the host's untyped
//! inputs into a typed configuration and the transfer's result back into
//! untyped outputs and log lines:
//!
//! - **[`core`]**: Pure parsing and projection. No I/O, fully testable in isolation.
//! - **[`io`]**: Host adapters (GitHub Actions environment, TOML inputs file,
//!   in-memory fake) behind the traits in [`io::host`].
//!
//! [`inputs`] resolves the configuration and [`report`] publishes results.

pub mod core;
pub mod exit_codes;
pub mod inputs;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
