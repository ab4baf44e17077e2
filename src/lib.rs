// desclint - lib.rs
//
// Library entry point, exposing all modules for integration testing.
// The CLI wrapper lives in `main.rs` and is not part of the library surface.

pub mod core;
pub mod util;
