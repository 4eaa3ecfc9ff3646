use phonebook::database::Database;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestDb {
    db: Arc<Database>,
    path: String,
}

impl TestDb {
    pub fn db(&self) -> Arc<Database> {
        self.db.clone()
    }
}

pub async fn setup_test_db() -> TestDb {
    // Use file-based SQLite for tests (unique UUID per test for parallel execution)
    let temp_file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", temp_file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations().await.expect("Failed to apply schema");

    TestDb {
        db: Arc::new(db),
        path: temp_file,
    }
}

pub async fn teardown_test_db(test_db: TestDb) {
    test_db.db.pool().close().await;
    let _ = std::fs::remove_file(&test_db.path);
    let _ = std::fs::remove_file(format!("{}-wal", test_db.path));
    let _ = std::fs::remove_file(format!("{}-shm", test_db.path));
}
