//! Integration tests for hashmeter.
//!
//! Concurrency cases that drive the counter and timer from many threads
//! at once and verify the linearizability and edge-sampling properties.
