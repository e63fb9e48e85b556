pub mod doc;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod zoom_token;
#[cfg(test)]
mod zoom_token_test;

pub use handlers::ZoomState;
pub use routes::routes;
