use crate::api::middleware::error::ApiResult;
use crate::domain::ports::person_repository::PersonRepository;
use crate::models::Person;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory backend: one shared sequence of persons behind a lock. Each
/// repository call takes the lock once, so individual operations are atomic;
/// a name check and a later insert from different requests can still
/// interleave, which the sqlite backend's UNIQUE constraint would catch.
pub struct MemoryStore {
    persons: RwLock<Vec<Person>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            persons: RwLock::new(Vec::new()),
        }
    }

    /// The classic starter phonebook, for running without a database.
    pub fn seeded() -> Self {
        let persons = vec![
            Person::new("Arto Hellas".to_string(), "040-123456".to_string()),
            Person::new("Ada Lovelace".to_string(), "39-44-5323523".to_string()),
            Person::new("Dan Abramov".to_string(), "12-43-234345".to_string()),
            Person::new("Mary Poppendieck".to_string(), "39-23-6423122".to_string()),
        ];
        Self {
            persons: RwLock::new(persons),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonRepository for MemoryStore {
    async fn list_persons(&self) -> ApiResult<Vec<Person>> {
        Ok(self.persons.read().await.clone())
    }

    async fn find_person_by_id(&self, id: &str) -> ApiResult<Option<Person>> {
        let persons = self.persons.read().await;
        Ok(persons.iter().find(|p| p.id == id).cloned())
    }

    async fn find_person_by_name(&self, name: &str) -> ApiResult<Option<Person>> {
        let persons = self.persons.read().await;
        Ok(persons.iter().find(|p| p.name == name).cloned())
    }

    async fn create_person(&self, person: &Person) -> ApiResult<()> {
        self.persons.write().await.push(person.clone());
        Ok(())
    }

    async fn update_person(&self, person: &Person) -> ApiResult<bool> {
        let mut persons = self.persons.write().await;
        match persons.iter_mut().find(|p| p.id == person.id) {
            Some(slot) => {
                *slot = person.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_person(&self, id: &str) -> ApiResult<()> {
        self.persons.write().await.retain(|p| p.id != id);
        Ok(())
    }

    async fn count_persons(&self) -> ApiResult<i64> {
        Ok(self.persons.read().await.len() as i64)
    }
}
