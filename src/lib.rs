//! # Segtrack Core
//!
//! Core engine of the Segtrack operations panel: the admin backend used by a
//! vehicle-recovery company to dispatch field agents, manage client contracts,
//! and bill recovery services.
//!
//! ## Features
//!
//! - **Permission Resolver**: Pattern-based permission checks over whatever
//!   grant shape the legacy backend stored (scope lists, structured maps, or
//!   JSON embedded in strings)
//! - **Fail-Closed Authorization**: Unparseable permission strings deny, they
//!   never error
//! - **Contract Converter**: Total, lossless mapping between billing-contract
//!   models and the flat edit-form representation
//! - **Report Assembly**: Deterministic photo-grid pagination for occurrence
//!   report PDFs
//! - **Configurable**: YAML files plus `SEGTRACK_*` environment overrides
//!
//! ## Quick Start - Permission Checks
//!
//! ```rust,no_run
//! use segtrack_core::auth::{AccessControl, AuthSession};
//! use segtrack_core::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let access = AccessControl::new(&config.access);
//!
//!     // Sessions deserialize straight from the backend's JSON
//!     let session: AuthSession = serde_json::from_str(
//!         r#"{"role": "operador", "permissions": ["access:dashboard"]}"#,
//!     )?;
//!
//!     let outcome = access.check(&session, "access:dashboard");
//!     println!("allowed: {}", outcome.allowed);
//!     Ok(())
//! }
//! ```
//!
//! ## Report Mode
//!
//! ```rust,no_run
//! use segtrack_core::config::Config;
//! use segtrack_core::core::{Cliente, Ocorrencia, Panel};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let panel = Panel::new(Config::from_file("config/panel.yaml")?)?;
//!
//!     let cliente = Cliente::new("Transportes Alfa");
//!     let ocorrencia = Ocorrencia::new(cliente.meta.id);
//!
//!     let outline = panel.build_report(&ocorrencia, &cliente);
//!     println!("pages: {}", outline.page_count());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{PanelError, Result};

// Export the permission engine
pub use auth::{AccessControl, AuthSession, AuthzResult, GuardOutcome, PermissionGrant, resolve};

// Export contract conversion
pub use core::contracts::{Contrato, ContratoForm, to_contrato, to_form};

// Export report assembly
pub use core::reports::{GridLayout, PaginationPlan, ReportOutline, paginate_photos};

pub use core::Panel;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
