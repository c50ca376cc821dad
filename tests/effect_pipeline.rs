//! End-to-end pipelines mixing Effect, Optional and Disjunction
//!
//! Models a small employee store: reads and writes happen inside effects,
//! lookups that can miss produce disjunctions, and the whole pipeline is
//! discharged with `chain` at the edge.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use monad_maniac::prelude::*;
use monad_maniac::{assert_left, assert_right};

type Store = Rc<RefCell<HashMap<String, String>>>;

fn store_with(entries: &[(&str, &str)]) -> Store {
    let map = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Rc::new(RefCell::new(map))
}

fn read_name(store: &Store, key: &str) -> Effect<Disjunction<String, String>> {
    let store = Rc::clone(store);
    let key = key.to_string();
    Effect::from(move || {
        let found = store.borrow().get(&key).cloned();
        Disjunction::from_nullable(found, "Name not found".to_string())
    })
}

fn write_name(store: &Store, key: &str, name: String) -> Effect<()> {
    let store = Rc::clone(store);
    let key = key.to_string();
    Effect::from(move || {
        store.borrow_mut().insert(key.clone(), name.clone());
    })
}

fn announce(name: Disjunction<String, String>) -> String {
    name.map(|n| format!("{} was fired!", n)).case_of(|e| e, |ok| ok)
}

#[test]
fn test_fired_announcement() {
    let store = store_with(&[("employee", "Jake")]);

    let message = read_name(&store, "employee").map(announce).run();
    assert_eq!(message, "Jake was fired!");
}

#[test]
fn test_missing_name_goes_left() {
    let store = store_with(&[]);

    let name = read_name(&store, "employee").run();
    assert_left!(name.clone(), "Name not found".to_string());
    assert_eq!(announce(name), "Name not found");
}

#[test]
fn test_write_is_deferred_until_run() {
    let store = store_with(&[]);
    let write = write_name(&store, "employee", "Jake".to_string());

    assert!(store.borrow().is_empty());

    write.run();
    let name = read_name(&store, "employee").run();
    assert_right!(name, "Jake".to_string());
}

#[test]
fn test_flat_map_sequences_write_then_read() {
    let store = store_with(&[]);
    let reader = Rc::clone(&store);

    let pipeline = write_name(&store, "employee", "Jake".to_string())
        .flat_map(move |()| read_name(&reader, "employee"))
        .map(announce);

    assert!(store.borrow().is_empty());
    assert_eq!(pipeline.run(), "Jake was fired!");
}

#[test]
fn test_chain_discharges_with_result() {
    let store = store_with(&[("employee", "Jake")]);

    let length = read_name(&store, "employee").chain(|name| name.map(|n| n.len()).get_or_else(0));
    assert_eq!(length, 4);
}

#[test]
fn test_rerun_observes_new_state() {
    let store = store_with(&[]);
    let read = read_name(&store, "employee");

    assert!(read.run().is_left());
    store
        .borrow_mut()
        .insert("employee".to_string(), "Jake".to_string());
    assert!(read.run().is_right());
}

#[test]
fn test_optional_lookup_feeds_disjunction() {
    let store = store_with(&[("employee", "Jake")]);

    let upper = Effect::from(move || store.borrow().get("employee").cloned())
        .map(|found| {
            Optional::<String>::of(found)
                .map(|n| n.to_uppercase())
                .to_either("Name not found".to_string())
        })
        .run();

    assert_eq!(upper.to_string(), "Right(JAKE)");
}
