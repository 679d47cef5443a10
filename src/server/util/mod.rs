//! Utility helpers for server operations.
//!
//! Currently test-only: shared setup and mock-data helpers used by the data
//! and service test modules.
