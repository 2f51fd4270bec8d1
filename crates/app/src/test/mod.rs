//! Test infrastructure shared across service tests.
