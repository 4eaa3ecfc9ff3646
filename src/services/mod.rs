pub mod person_service;
pub mod validation;

pub use person_service::*;
pub use validation::*;
