//! Integration tests for the lutgrid crates.
//!
//! End-to-end checks of grid construction, every evaluator and the out of
//! domain policy through the public `Grid` API, plus the exchange form on
//! disk and snapshot swapping under concurrent readers.
