pub mod scheduler;
pub mod viewport;
