//! Integration tests entry point
//!
//! Includes every module from the integration/ subdirectory so the tests
//! build as one binary.

mod integration;
