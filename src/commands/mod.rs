//! Flow implementations
//!
//! Each flow module provides a command struct constructed by the mode
//! dispatcher, with an execute method returning the Gradle exit code.

pub mod debug;
pub mod lint;
pub mod raw;
pub mod release;
