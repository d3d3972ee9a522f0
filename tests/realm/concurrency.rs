//! Tests for realms shared between threads

use std::sync::{Arc, Barrier};
use std::thread;

use symrealm::{JsSymbol, JsValue, Realm};

const THREADS: usize = 8;

#[test]
fn test_concurrent_symbol_for_same_key() {
    let realm = Arc::new(Realm::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let realm = Arc::clone(&realm);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                realm.symbol_for(&JsValue::from("race"))
            })
        })
        .collect();

    let results: Vec<JsSymbol> = handles
        .into_iter()
        .filter_map(|handle| handle.join().ok())
        .collect();

    assert_eq!(results.len(), THREADS);
    let first = results.first().cloned();
    assert!(results.iter().all(|sym| Some(sym) == first.as_ref()));
    assert_eq!(realm.symbol_registry().len(), 1);
}

#[test]
fn test_concurrent_symbol_for_distinct_keys() {
    let realm = Arc::new(Realm::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let realm = Arc::clone(&realm);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let key = JsValue::from(format!("key-{}", i % 4));
                let sym = realm.symbol_for(&key);
                // keyFor from the creating thread sees the same entry
                realm.symbol_key_for(&JsValue::Symbol(sym)).ok().flatten()
            })
        })
        .collect();

    for handle in handles {
        let key = handle.join().ok().flatten();
        assert!(key.is_some_and(|k| k.as_str().starts_with("key-")));
    }
    assert_eq!(realm.symbol_registry().len(), 4);
}

#[test]
fn test_symbols_cross_threads_keep_identity() {
    let realm = Arc::new(Realm::new());
    let local = realm.symbol_for(&JsValue::from("moved"));

    let remote = {
        let realm = Arc::clone(&realm);
        thread::spawn(move || realm.symbol_for(&JsValue::from("moved")))
            .join()
            .ok()
    };
    assert_eq!(remote, Some(local));
}
