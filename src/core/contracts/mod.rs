//! Contract domain: wire model, edit form and conversion
//!
//! A client carries a list of billing contracts. The backend speaks the
//! tagged [`Contrato`] union; the edit dialog speaks the flat string-typed
//! [`ContratoForm`]. [`to_contrato`] and [`to_form`] translate between the
//! two, both total functions that degrade instead of failing.

pub mod convert;
pub mod form;
pub mod model;

// Re-export commonly used types
pub use convert::{to_contrato, to_form, to_number};
pub use form::ContratoForm;
pub use model::{Contrato, Franquia, RegiaoPreco};
