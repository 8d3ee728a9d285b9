// Domain layer: catalog entities. No external dependencies beyond std/serde/tracing.

pub mod model;
