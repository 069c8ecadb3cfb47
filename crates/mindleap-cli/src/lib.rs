//! mindleap-cli: command-line access to the graph model service.
//!
//! Reads graph model definitions from JSON files and forwards them to the
//! service; the binary lives in `main.rs`.

pub mod error;
pub mod input;
