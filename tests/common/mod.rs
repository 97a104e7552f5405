use sea_orm::DatabaseConnection;
use tempfile::TempDir;

// Each test gets its own migrated store in a temp dir; the TempDir handle
// must stay alive for the duration of the test.
pub async fn open_store() -> (TempDir, DatabaseConnection) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("theater.db").display());
    let db = marquee::db::connect_and_migrate(&url).await.expect("connect and migrate");
    (dir, db)
}
