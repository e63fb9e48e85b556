// --- File: crates/huddle_slack/src/lib.rs ---
pub mod doc;
pub mod handlers;
pub mod oauth;
pub mod routes;
pub mod service;

pub use handlers::SlackState;
pub use routes::routes;
