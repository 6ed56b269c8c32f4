//! Core data models for the panel
//!
//! This module defines the records the panel manages: clients with their
//! billing contracts, service providers, and dispatch occurrences. All of
//! them mirror the backend's JSON shapes and carry common [`RecordMeta`].

pub mod cliente;
pub mod ocorrencia;
pub mod prestador;

// Re-export commonly used types
pub use cliente::Cliente;
pub use ocorrencia::{Despesa, Foto, Ocorrencia, OcorrenciaStatus};
pub use prestador::Prestador;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common metadata for stored records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMeta {
    /// Unique identifier
    pub id: Uuid,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Version for optimistic locking
    pub version: i64,
}

impl Default for RecordMeta {
    fn default() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }
}

impl RecordMeta {
    /// Create new metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the timestamp and increment version
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
        self.version += 1;
    }
}
