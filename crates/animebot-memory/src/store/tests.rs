use super::*;
use serde_json::json;

/// Open a store in a fresh temp dir. The dir guard must outlive the store.
async fn test_store() -> (tempfile::TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("data/user_data.json"))
        .await
        .unwrap();
    (dir, store)
}

#[test]
fn test_add_favorite_creates_all_lists() {
    let mut data = UserData::default();
    assert_eq!(data.add_favorite("7", "Naruto"), FavoriteOutcome::Added);

    let lists = data.get("7").unwrap();
    assert_eq!(lists.favorites, vec!["Naruto"]);
    assert!(lists.watchlist.is_empty());
    assert!(lists.completed.is_empty());
    assert!(lists.dropped.is_empty());
    assert!(lists.custom_lists.is_empty());

    let value = serde_json::to_value(&data).unwrap();
    let keys: Vec<&str> = value["7"]
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    assert_eq!(keys.len(), 5);
    for key in ["favorites", "watchlist", "completed", "dropped", "custom_lists"] {
        assert!(keys.contains(&key), "missing key {key}");
    }
}

#[test]
fn test_add_favorite_twice_is_already_present() {
    let mut data = UserData::default();
    assert_eq!(data.add_favorite("7", "Naruto"), FavoriteOutcome::Added);
    assert_eq!(
        data.add_favorite("7", "Naruto"),
        FavoriteOutcome::AlreadyPresent
    );
    assert_eq!(data.get("7").unwrap().favorites.len(), 1);

    // Same title for another user is independent.
    assert_eq!(data.add_favorite("8", "Naruto"), FavoriteOutcome::Added);
}

#[test]
fn test_favorites_keep_insertion_order() {
    let mut data = UserData::default();
    data.add_favorite("1", "Monster");
    data.add_favorite("1", "Bleach");
    data.add_favorite("1", "Akira");
    assert_eq!(
        data.get("1").unwrap().favorites,
        vec!["Monster", "Bleach", "Akira"]
    );
}

#[test]
fn test_partial_entry_loads_with_defaults() {
    let data: UserData = serde_json::from_str(r#"{"5": {"favorites": ["Mushishi"]}}"#).unwrap();
    let lists = data.get("5").unwrap();
    assert_eq!(lists.favorites, vec!["Mushishi"]);
    assert!(lists.dropped.is_empty());
}

#[tokio::test]
async fn test_open_creates_empty_document() {
    let (_dir, store) = test_store().await;
    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw.trim(), "{}");
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_favorite_on_empty_file_matches_expected_document() {
    let (_dir, store) = test_store().await;
    std::fs::write(store.path(), "{}").unwrap();

    let outcome = store.add_favorite("42", "Bleach").await.unwrap();
    assert_eq!(outcome, FavoriteOutcome::Added);

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        json!({
            "42": {
                "favorites": ["Bleach"],
                "watchlist": [],
                "completed": [],
                "dropped": [],
                "custom_lists": {}
            }
        })
    );
}

#[tokio::test]
async fn test_add_favorite_twice_does_not_grow() {
    let (_dir, store) = test_store().await;
    assert_eq!(
        store.add_favorite("42", "Bleach").await.unwrap(),
        FavoriteOutcome::Added
    );
    assert_eq!(
        store.add_favorite("42", "Bleach").await.unwrap(),
        FavoriteOutcome::AlreadyPresent
    );
    let lists = store.lists("42").await.unwrap().unwrap();
    assert_eq!(lists.favorites.len(), 1);
}

#[tokio::test]
async fn test_saved_json_uses_four_space_indent() {
    let (_dir, store) = test_store().await;
    store.add_favorite("1", "Akira").await.unwrap();
    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\n    \"1\": {"), "unexpected layout:\n{raw}");
    assert!(raw.contains("\n        \"favorites\": ["));
}

#[tokio::test]
async fn test_reopen_keeps_data_and_leaves_no_temp_file() {
    let (dir, store) = test_store().await;
    store.add_favorite("1", "Akira").await.unwrap();
    let path = store.path().to_path_buf();
    drop(store);

    let reopened = Store::open(path.clone()).await.unwrap();
    let lists = reopened.lists("1").await.unwrap().unwrap();
    assert_eq!(lists.favorites, vec!["Akira"]);
    assert!(reopened.lists("2").await.unwrap().is_none());

    let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("data"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_concurrent_adds_are_not_lost() {
    let (_dir, store) = test_store().await;
    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .add_favorite(&format!("user{}", i % 4), &format!("title{i}"))
                .await
                .unwrap()
        }));
    }
    for h in handles {
        assert_eq!(h.await.unwrap(), FavoriteOutcome::Added);
    }

    let data = store.load().await.unwrap();
    let total: usize = (0..4)
        .map(|u| data.get(&format!("user{u}")).unwrap().favorites.len())
        .sum();
    assert_eq!(total, 16);
}

#[tokio::test]
async fn test_corrupt_file_is_memory_error() {
    let (_dir, store) = test_store().await;
    std::fs::write(store.path(), "{not json").unwrap();
    let err = store.add_favorite("1", "Akira").await.unwrap_err();
    assert!(matches!(err, AnimeBotError::Memory(_)));
}
