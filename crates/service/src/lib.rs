//! Service layer for the site: catalog reads and lead capture.
//! - Business rules live here; persistence sits behind repository traits.
//! - SeaORM repositories wrap the `models` entities, in-memory ones back tests.
//! - Store failures surface as [`errors::ServiceError`]; lead submission never fails.

pub mod errors;
pub mod content;
pub mod leads;
#[cfg(test)]
pub mod test_support;
