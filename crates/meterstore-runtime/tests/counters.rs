//! Counter operations through the coordinator.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use meterstore_runtime::{Store, StoreConfig};

#[tokio::test]
async fn all_is_empty_then_tracks_surviving_set() {
    let (store, _coord) = Store::spawn(&StoreConfig::default()).unwrap();
    let c = store.counters();
    assert!(c.all().await.unwrap().is_empty());

    c.set("a", 1).await.unwrap();
    c.set("b", 2).await.unwrap();
    c.set("c", 3).await.unwrap();
    c.clear_one("b").await.unwrap();

    let expected: HashMap<String, i64> = [("a".to_string(), 1), ("c".to_string(), 3)].into();
    assert_eq!(c.all().await.unwrap(), expected);
}

#[tokio::test]
async fn get_is_absent_before_write() {
    let (store, _coord) = Store::spawn(&StoreConfig::default()).unwrap();
    let c = store.counters();
    assert_eq!(c.get("k").await.unwrap(), None);
    c.set("k", 99).await.unwrap();
    assert_eq!(c.get("k").await.unwrap(), Some(99));
}

#[tokio::test]
async fn incr_and_decr_from_absent() {
    let (store, _coord) = Store::spawn(&StoreConfig::default()).unwrap();
    let c = store.counters();

    c.incr("i").await.unwrap();
    assert_eq!(c.get("i").await.unwrap(), Some(1));
    c.incr("i").await.unwrap();
    assert_eq!(c.get("i").await.unwrap(), Some(2));

    c.incr_by("ib", 2).await.unwrap();
    c.incr_by("ib", 2).await.unwrap();
    assert_eq!(c.get("ib").await.unwrap(), Some(4));

    c.decr("d").await.unwrap();
    c.decr("d").await.unwrap();
    assert_eq!(c.get("d").await.unwrap(), Some(-2));

    c.decr_by("db", 2).await.unwrap();
    c.decr_by("db", 2).await.unwrap();
    assert_eq!(c.get("db").await.unwrap(), Some(-4));
}

#[tokio::test]
async fn clear_one_missing_is_noop_and_clear_removes_all() {
    let (store, _coord) = Store::spawn(&StoreConfig::default()).unwrap();
    let c = store.counters();
    c.set("x", 1).await.unwrap();
    c.clear_one("never-set").await.unwrap();
    assert_eq!(c.get("x").await.unwrap(), Some(1));

    c.set("y", 2).await.unwrap();
    c.clear().await.unwrap();
    assert!(c.all().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_increments_are_serialized() {
    let (store, _coord) = Store::spawn(&StoreConfig::default()).unwrap();

    let tasks = (0..8).map(|_| {
        let store = store.clone();
        tokio::spawn(async move {
            for _ in 0..100 {
                store.counters().incr("shared").await.unwrap();
            }
        })
    });
    for res in futures_util::future::join_all(tasks).await {
        res.unwrap();
    }

    assert_eq!(store.counters().get("shared").await.unwrap(), Some(800));
}

#[tokio::test]
async fn closed_coordinator_surfaces_error() {
    let (store, coord) = Store::spawn(&StoreConfig::default()).unwrap();
    coord.abort();
    let _ = coord.await;

    let err = store.counters().get("k").await.expect_err("coordinator is gone");
    assert!(err.is_closed());

    // fire-and-forget stays silent
    store.series().sample("s", 1.0);
    assert_eq!(store.dropped(), 0);
}
