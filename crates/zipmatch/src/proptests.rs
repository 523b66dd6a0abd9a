//! Property-based tests for zipping, matching and extraction.
