pub mod seed;

pub use seed::*;
