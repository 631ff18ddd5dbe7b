pub mod handlers;
pub mod middleware;
pub mod oauth;
pub mod tracing;
