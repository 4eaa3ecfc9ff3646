pub mod info;
pub mod middleware;
pub mod persons;

pub use middleware::*;
