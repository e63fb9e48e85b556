// --- File: crates/huddle_gcal/src/lib.rs ---
pub mod auth;
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;
pub mod service;
#[cfg(test)]
mod service_test;

pub use handlers::GcalState;
pub use routes::routes;
