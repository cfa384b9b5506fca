pub mod routes;
pub mod startup;
pub mod errors;
pub mod openapi;

pub use routes::{build_router, ServerState};
pub use startup::{run, shutdown_signal};
