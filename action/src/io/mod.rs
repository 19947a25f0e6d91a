//! Host adapters: where inputs come from and where outputs and logs go.

pub mod github;
pub mod host;
pub mod inputs_file;
pub mod memory;
