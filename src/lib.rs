//! In-memory data model for an academic catalog: organizational units, the
//! courses they offer, and the curricular subjects each course groups into
//! mandatory, free-elective and directed-elective sequences.
//!
//! Everything is synchronous and in-memory. Constructors take the scalar
//! fields; collection membership is populated afterward through explicit
//! append operations. Callers using the types concurrently serialize
//! mutations themselves.

pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::snapshot::CatalogSnapshot;
pub use crate::domain::model::{Course, OrganizationalUnit, Subject};
pub use crate::utils::error::{CatalogError, Result};
