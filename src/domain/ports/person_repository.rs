use crate::api::middleware::error::ApiResult;
use crate::models::Person;
use async_trait::async_trait;

/// Storage port for the phonebook. Implemented by the sqlite-backed
/// `Database` and the in-memory `MemoryStore`; the router only ever sees
/// this trait.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Full sequence of persons in store order.
    async fn list_persons(&self) -> ApiResult<Vec<Person>>;
    async fn find_person_by_id(&self, id: &str) -> ApiResult<Option<Person>>;
    async fn find_person_by_name(&self, name: &str) -> ApiResult<Option<Person>>;
    async fn create_person(&self, person: &Person) -> ApiResult<()>;
    /// Replaces name/number at the person's id. Returns false when no
    /// person exists at that id.
    async fn update_person(&self, person: &Person) -> ApiResult<bool>;
    /// Idempotent: succeeds whether or not a person existed at `id`.
    async fn delete_person(&self, id: &str) -> ApiResult<()>;
    async fn count_persons(&self) -> ApiResult<i64>;
}
