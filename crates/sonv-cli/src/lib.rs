//! sonv-cli library root.
//!
//! The command implementations live here so integration tests can run them
//! without spawning the binary.

pub mod commands;
