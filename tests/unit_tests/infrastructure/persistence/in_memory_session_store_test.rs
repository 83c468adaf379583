use std::sync::Arc;
use std::time::Duration;

use docent::application::ports::{SessionStore, SessionStoreError};
use docent::domain::{ContentType, Document, Session, SessionId, VectorIndex};
use docent::infrastructure::persistence::{InMemorySessionStore, spawn_idle_sweep};

#[tokio::test]
async fn given_inserted_session_when_getting_then_returns_same_handle() {
    let store = InMemorySessionStore::new(8);
    let session = Session::new();
    let id = session.id;

    let inserted = store.insert(session).await.unwrap();
    let fetched = store.get(id).await.unwrap().unwrap();

    assert!(Arc::ptr_eq(&inserted, &fetched));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn given_handle_when_mutating_session_then_change_is_visible_through_store() {
    let store = InMemorySessionStore::new(8);
    let session = Session::new();
    let id = session.id;
    let handle = store.insert(session).await.unwrap();

    handle.lock().await.replace_document(
        Document::new("a.txt".to_string(), ContentType::Text, "text".to_string()),
        VectorIndex::empty(),
    );

    let fetched = store.get(id).await.unwrap().unwrap();
    assert!(fetched.lock().await.has_document());
}

#[tokio::test]
async fn given_unknown_id_when_getting_then_returns_none() {
    let store = InMemorySessionStore::new(8);

    assert!(store.get(SessionId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn given_duplicate_id_when_inserting_then_returns_already_exists() {
    let store = InMemorySessionStore::new(8);
    let id = SessionId::new();
    store.insert(Session::with_id(id)).await.unwrap();

    let result = store.insert(Session::with_id(id)).await;

    assert!(matches!(result, Err(SessionStoreError::AlreadyExists(dup)) if dup == id));
}

#[tokio::test]
async fn given_full_store_when_inserting_then_returns_capacity_reached() {
    let store = InMemorySessionStore::new(1);
    store.insert(Session::new()).await.unwrap();

    let result = store.insert(Session::new()).await;

    assert!(matches!(result, Err(SessionStoreError::CapacityReached(1))));
}

#[tokio::test]
async fn given_existing_session_when_removing_then_it_is_gone_and_slot_is_freed() {
    let store = InMemorySessionStore::new(1);
    let session = Session::new();
    let id = session.id;
    store.insert(session).await.unwrap();

    assert!(store.remove(id).await.unwrap());
    assert!(!store.remove(id).await.unwrap());
    assert!(store.insert(Session::new()).await.is_ok());
}

const IDLE_TTL: Duration = Duration::from_secs(30 * 60);

#[tokio::test(start_paused = true)]
async fn given_idle_sessions_when_capacity_reached_then_oldest_is_evicted() {
    let store = InMemorySessionStore::new(3).with_idle_ttl(IDLE_TTL);
    let oldest = Session::new();
    let oldest_id = oldest.id;
    store.insert(oldest).await.unwrap();
    tokio::time::advance(Duration::from_secs(10 * 60)).await;
    let second = store.insert(Session::new()).await.unwrap();
    let third = store.insert(Session::new()).await.unwrap();
    tokio::time::advance(Duration::from_secs(25 * 60)).await;

    let fourth = store.insert(Session::new()).await;

    assert!(fourth.is_ok());
    assert_eq!(store.count().await.unwrap(), 3);
    assert!(store.get(oldest_id).await.unwrap().is_none());
    assert!(store.get(second.lock().await.id).await.unwrap().is_some());
    assert!(store.get(third.lock().await.id).await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn given_recently_fetched_session_when_capacity_reached_then_it_is_kept() {
    let store = InMemorySessionStore::new(1).with_idle_ttl(IDLE_TTL);
    let session = Session::new();
    let id = session.id;
    store.insert(session).await.unwrap();
    tokio::time::advance(Duration::from_secs(20 * 60)).await;
    store.get(id).await.unwrap();
    tokio::time::advance(Duration::from_secs(20 * 60)).await;

    let result = store.insert(Session::new()).await;

    assert!(matches!(result, Err(SessionStoreError::CapacityReached(1))));
    assert!(store.get(id).await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn given_locked_idle_session_when_evicting_then_it_survives() {
    let store = InMemorySessionStore::new(8).with_idle_ttl(IDLE_TTL);
    let busy = store.insert(Session::new()).await.unwrap();
    store.insert(Session::new()).await.unwrap();
    tokio::time::advance(IDLE_TTL).await;

    let guard = busy.lock().await;
    let evicted = store.evict_idle().await.unwrap();

    assert_eq!(evicted, 1);
    assert_eq!(store.count().await.unwrap(), 1);
    assert!(store.get(guard.id).await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn given_store_without_ttl_when_evicting_then_nothing_is_removed() {
    let store = InMemorySessionStore::new(8);
    store.insert(Session::new()).await.unwrap();
    tokio::time::advance(Duration::from_secs(24 * 60 * 60)).await;

    assert_eq!(store.evict_idle().await.unwrap(), 0);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test(start_paused = true)]
async fn given_running_sweep_when_sessions_go_idle_then_they_are_reclaimed() {
    let store: Arc<dyn SessionStore> =
        Arc::new(InMemorySessionStore::new(8).with_idle_ttl(IDLE_TTL));
    store.insert(Session::new()).await.unwrap();
    store.insert(Session::new()).await.unwrap();

    let sweep = spawn_idle_sweep(Arc::clone(&store), Duration::from_secs(60));
    tokio::time::sleep(IDLE_TTL + Duration::from_secs(61)).await;

    assert_eq!(store.count().await.unwrap(), 0);
    sweep.abort();
}
