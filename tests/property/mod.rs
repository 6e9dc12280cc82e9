//! Property-based tests for resolution and persistence guarantees

mod resolution;
