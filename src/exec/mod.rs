//! External process execution
//!
//! Everything apkgo does ends in a child process: the Gradle wrapper,
//! keytool, the system opener. These modules wrap `std::process` with
//! the small amount of structure the flows need.

pub mod gradle;
pub mod subprocess;
