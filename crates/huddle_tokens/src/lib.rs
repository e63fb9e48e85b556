// --- File: crates/huddle_tokens/src/lib.rs ---
pub mod doc;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod routes;
pub mod store;
#[cfg(test)]
mod store_test;

pub use routes::routes;
pub use store::TokenStore;
