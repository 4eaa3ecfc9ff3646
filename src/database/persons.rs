use crate::api::middleware::error::ApiResult;
use crate::database::Database;
use crate::domain::ports::person_repository::PersonRepository;
use crate::models::Person;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl PersonRepository for Database {
    async fn list_persons(&self) -> ApiResult<Vec<Person>> {
        let rows = sqlx::query(
            "SELECT id, name, number
             FROM persons
             ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut persons = Vec::new();
        for row in rows {
            persons.push(Person {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                number: row.try_get("number")?,
            });
        }

        Ok(persons)
    }

    async fn find_person_by_id(&self, id: &str) -> ApiResult<Option<Person>> {
        let row = sqlx::query(
            "SELECT id, name, number
             FROM persons
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Person {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                number: row.try_get("number")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn find_person_by_name(&self, name: &str) -> ApiResult<Option<Person>> {
        let row = sqlx::query(
            "SELECT id, name, number
             FROM persons
             WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Person {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                number: row.try_get("number")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn create_person(&self, person: &Person) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO persons (id, name, number)
             VALUES (?, ?, ?)",
        )
        .bind(&person.id)
        .bind(&person.name)
        .bind(&person.number)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_person(&self, person: &Person) -> ApiResult<bool> {
        let result = sqlx::query(
            "UPDATE persons
             SET name = ?, number = ?
             WHERE id = ?",
        )
        .bind(&person.name)
        .bind(&person.number)
        .bind(&person.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_person(&self, id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_persons(&self) -> ApiResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM persons")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("count")?)
    }
}
