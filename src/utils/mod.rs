//! Utility modules for the panel core
//!
//! This module contains shared functionality used across the crate, organized
//! by concern:
//!
//! - **error**: Error handling types
//! - **format**: Brazilian currency and franchise-hours formatting
//! - **logging**: Tracing subscriber setup
//! - **validation**: Operator-entered document validation (CNPJ, plates)

pub mod error;
pub mod format;
pub mod logging;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{PanelError, Result};
pub use format::{format_currency, format_horas, parse_currency, parse_horas};
pub use logging::{LogLevel, init_json_logger, init_logger};
pub use validation::DocumentValidator;
