use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub number: String,
}

impl Person {
    /// The store assigns the id; callers never supply one on create.
    pub fn new(name: String, number: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            number,
        }
    }
}

/// POST/PUT body. Fields are optional so a missing field becomes a
/// validation error instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonPayload {
    pub name: Option<String>,
    pub number: Option<String>,
}
