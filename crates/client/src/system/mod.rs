pub mod session;
pub mod tracing;
