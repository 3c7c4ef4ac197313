//! Configuration loading
//!
//! Configuration is resolved once at startup into immutable values and
//! passed to the flows that need it; the process environment is never
//! mutated.

pub mod env_file;
pub mod signing;
