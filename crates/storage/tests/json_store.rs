use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use prep_core::model::{User, UserId};
use prep_core::time::fixed_now;
use storage::{JsonFileStore, SessionStore};

fn scratch_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("prep-store-{tag}-{}-{nanos}.json", std::process::id()))
}

fn sample_user() -> User {
    User {
        id: UserId::new("u-1"),
        username: "dana".into(),
        email: "dana@example.com".into(),
        selected_topics: vec!["Algorithms".into()],
        custom_topics: Vec::new(),
        target_companies: vec!["Google".into()],
        notification_frequency: 10,
        quiz_goal: 1,
        created_at: fixed_now(),
    }
}

#[tokio::test]
async fn save_load_clear_roundtrip() {
    let path = scratch_path("roundtrip");
    let store = JsonFileStore::new(&path);

    assert!(store.load().await.unwrap().is_none());

    let user = sample_user();
    store.save(&user).await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some(user.clone()));

    // Saving again replaces the record rather than appending.
    let renamed = User {
        username: "dana-2".into(),
        ..user
    };
    store.save(&renamed).await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some(renamed));

    store.clear().await.unwrap();
    assert!(store.load().await.unwrap().is_none());
    assert!(!path.exists());
}

#[tokio::test]
async fn clear_is_idempotent_when_missing() {
    let store = JsonFileStore::new(scratch_path("clear"));
    store.clear().await.unwrap();
    store.clear().await.unwrap();
}

#[tokio::test]
async fn corrupt_record_loads_as_none_and_is_removed() {
    let path = scratch_path("corrupt");
    fs::write(&path, "{not json").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load().await.unwrap().is_none());
    assert!(!path.exists());

    // The store stays usable afterwards.
    let user = sample_user();
    store.save(&user).await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some(user));
    store.clear().await.unwrap();
}

#[tokio::test]
async fn save_creates_missing_parent_directories() {
    let dir = scratch_path("nested");
    let path = dir.join("inner").join("session.json");
    let store = JsonFileStore::new(&path);

    store.save(&sample_user()).await.unwrap();
    assert!(path.exists());

    fs::remove_dir_all(&dir).unwrap();
}
