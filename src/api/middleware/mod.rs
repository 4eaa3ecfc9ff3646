pub mod error;

pub use error::*;

use crate::services::PersonService;

#[derive(Clone)]
pub struct AppState {
    pub person_service: PersonService,
}
