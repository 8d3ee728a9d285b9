pub mod snapshot;

pub use crate::domain::model::{Course, OrganizationalUnit, Subject};
pub use crate::utils::error::Result;
