pub mod artifacts;
pub mod core;
pub mod evaluation;
pub mod measures;
pub mod tasks;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
