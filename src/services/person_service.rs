use crate::api::middleware::error::{ApiError, ApiResult};
use crate::domain::ports::person_repository::PersonRepository;
use crate::models::{Person, PersonPayload};
use crate::services::validate_person_fields;
use std::sync::Arc;
use uuid::Uuid;

/// What `create` does when the name is already taken. The revisions of the
/// original service disagreed; here it is an explicit configuration choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateNamePolicy {
    /// Reject the create with a uniqueness conflict.
    #[default]
    Reject,
    /// Update the existing person's number instead of creating.
    Upsert,
}

impl std::str::FromStr for DuplicateNamePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(DuplicateNamePolicy::Reject),
            "upsert" => Ok(DuplicateNamePolicy::Upsert),
            _ => Err(format!("Invalid duplicate name policy: {}", s)),
        }
    }
}

#[derive(Clone)]
pub struct PersonService {
    repo: Arc<dyn PersonRepository>,
    duplicate_policy: DuplicateNamePolicy,
}

impl PersonService {
    pub fn new(repo: Arc<dyn PersonRepository>, duplicate_policy: DuplicateNamePolicy) -> Self {
        Self {
            repo,
            duplicate_policy,
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<Person>> {
        self.repo.list_persons().await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Person> {
        let id = parse_person_id(id)?;
        self.repo
            .find_person_by_id(&id)
            .await?
            .ok_or_else(|| ApiError::NotFound("person not found".to_string()))
    }

    pub async fn get_by_name(&self, name: &str) -> ApiResult<Person> {
        self.repo
            .find_person_by_name(name)
            .await?
            .ok_or_else(|| ApiError::NotFound("person not found".to_string()))
    }

    pub async fn create(&self, payload: &PersonPayload) -> ApiResult<Person> {
        let (name, number) = validate_person_fields(payload)?;

        if let Some(existing) = self.repo.find_person_by_name(&name).await? {
            match self.duplicate_policy {
                DuplicateNamePolicy::Reject => {
                    return Err(ApiError::Conflict("name must be unique".to_string()));
                }
                DuplicateNamePolicy::Upsert => {
                    let updated = Person {
                        id: existing.id,
                        name: name.clone(),
                        number: number.clone(),
                    };
                    // The name match can go stale if that person is deleted
                    // in between; fall through to a plain create then.
                    if self.repo.update_person(&updated).await? {
                        return Ok(updated);
                    }
                }
            }
        }

        let person = Person::new(name, number);
        self.repo.create_person(&person).await?;
        Ok(person)
    }

    pub async fn update(&self, id: &str, payload: &PersonPayload) -> ApiResult<Person> {
        let (name, number) = validate_person_fields(payload)?;
        let id = parse_person_id(id)?;

        let person = Person { id, name, number };
        if self.repo.update_person(&person).await? {
            Ok(person)
        } else {
            Err(ApiError::NotFound("person not found".to_string()))
        }
    }

    /// Always succeeds, whether or not anything was deleted. Malformed ids
    /// cannot match a person, so they fall under the same idempotent success.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        if let Ok(id) = parse_person_id(id) {
            self.repo.delete_person(&id).await?;
        }
        Ok(())
    }

    pub async fn count(&self) -> ApiResult<i64> {
        self.repo.count_persons().await
    }
}

/// Normalizes a raw path segment to the canonical store-native id form.
fn parse_person_id(raw: &str) -> ApiResult<String> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| ApiError::MalformedId)
}
