pub mod board;
pub mod drag;
pub mod log;
pub mod models;
pub mod services;
pub mod store;
