//! Common test utilities for segtrack-core
//!
//! This module provides shared test infrastructure for all tests:
//! - Test fixtures and data factories
//! - Custom assertions and helpers
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{ClienteFactory, SessionFactory};
//!
//! #[test]
//! fn my_test() {
//!     let session = SessionFactory::operator();
//!     let cliente = ClienteFactory::create();
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{ClienteFactory, OcorrenciaFactory, SessionFactory};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
