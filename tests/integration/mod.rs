//! Integration tests for segtrack-core
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod config_tests;
pub mod contract_tests;
