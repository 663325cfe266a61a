use quiz_core::model::{SkillProgress, SkillStats, SkillType};
use storage::PROGRESS_KEY;
use storage::repository::{KeyValueStore, SkillProgressRepository, Storage, StorageError};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_progress() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_progress?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.load_progress().await.unwrap().is_none());

    let mut progress = SkillProgress::new();
    progress.record(SkillType::SquareRoot, true);
    progress.record(SkillType::SquareRoot, true);
    progress.record(SkillType::CubeRoot, false);
    repo.save_progress(&progress).await.unwrap();

    let loaded = repo.load_progress().await.unwrap().expect("progress stored");
    assert_eq!(loaded, progress);
    assert_eq!(loaded.get(SkillType::SquareRoot), SkillStats::new(2, 0));
}

#[tokio::test]
async fn sqlite_set_overwrites_existing_key() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set("greeting", "hello").await.unwrap();
    repo.set("greeting", "bye").await.unwrap();

    assert_eq!(repo.get("greeting").await.unwrap().as_deref(), Some("bye"));
    assert_eq!(repo.get("missing").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set("k", "v").await.unwrap();
    repo.migrate().await.expect("second migrate");

    assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn sqlite_reports_malformed_progress() {
    let storage = Storage::sqlite("sqlite:file:memdb_malformed?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.kv.set(PROGRESS_KEY, "{\"square\": 3}").await.unwrap();

    let err = storage.progress.load_progress().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}
