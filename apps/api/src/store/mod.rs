//! Persistence layer: sqlx query functions over the talent schema, grouped
//! per aggregate. Handlers orchestrate these; no business rules live here
//! except the relationship invariants kept by `associations`.

pub mod associations;
pub mod companies;
pub mod jobs;
pub mod recruiters;
