pub mod level;
pub mod priority;
pub mod role;
