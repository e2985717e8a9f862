// Host-side tests for the parameter store.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod easing {
    include!("../src/core/easing.rs");
}
mod params {
    include!("../src/core/params.rs");
}
mod store {
    include!("../src/core/store.rs");
}

use params::*;
use std::cell::RefCell;
use std::rc::Rc;
use store::*;

fn recording_store() -> (ParamStore, Rc<RefCell<Vec<CameraParams>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = ParamStore::default();
    let seen_obs = seen.clone();
    store.subscribe(move |p| seen_obs.borrow_mut().push(*p));
    (store, seen)
}

#[test]
fn starts_with_defaults() {
    let store = ParamStore::default();
    assert_eq!(store.params(), CameraParams::default());
}

#[test]
fn set_param_replaces_one_field_and_notifies() {
    let (mut store, seen) = recording_store();
    store.set_param(ParamUpdate::Lag(0.7));
    let p = store.params();
    assert_eq!(p.lag, 0.7);
    assert_eq!(p.follow_speed, CameraParams::default().follow_speed);
    assert_eq!(p.easing, CameraParams::default().easing);
    assert_eq!(seen.borrow().as_slice(), &[p]);

    store.set_param(ParamUpdate::Easing(Easing::QuadOut));
    assert_eq!(store.params().easing, Easing::QuadOut);
    assert_eq!(store.params().lag, 0.7);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn set_param_does_not_validate() {
    let mut store = ParamStore::default();
    store.set_param(ParamUpdate::FollowSpeed(4.0));
    store.set_param(ParamUpdate::Shake(-1.0));
    assert_eq!(store.params().follow_speed, 4.0);
    assert_eq!(store.params().shake, -1.0);
}

#[test]
fn hydrate_merges_over_defaults_not_current_state() {
    let (mut store, seen) = recording_store();
    store.set_param(ParamUpdate::Lag(0.9));
    store.set_param(ParamUpdate::Shake(5.0));

    store.hydrate_from(&ParamPatch {
        follow_speed: Some(0.5),
        ..ParamPatch::default()
    });
    let p = store.params();
    assert_eq!(p.follow_speed, 0.5);
    assert_eq!(p.lag, CameraParams::default().lag);
    assert_eq!(p.shake, CameraParams::default().shake);
    assert_eq!(seen.borrow().last(), Some(&p));
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn reset_restores_defaults_and_notifies() {
    let (mut store, seen) = recording_store();
    store.set_param(ParamUpdate::FollowSpeed(0.9));
    store.reset();
    assert_eq!(store.params(), CameraParams::default());
    assert_eq!(seen.borrow().last(), Some(&CameraParams::default()));
}

#[test]
fn unsubscribe_stops_notifications() {
    let (mut store, seen) = recording_store();
    let other = Rc::new(RefCell::new(0u32));
    let other_obs = other.clone();
    let id = store.subscribe(move |_| *other_obs.borrow_mut() += 1);

    store.set_param(ParamUpdate::Lag(0.2));
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set_param(ParamUpdate::Lag(0.3));

    assert_eq!(*other.borrow(), 1);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn stores_are_independent() {
    let mut a = ParamStore::default();
    let b = ParamStore::default();
    a.set_param(ParamUpdate::FollowSpeed(1.0));
    assert_eq!(b.params(), CameraParams::default());
}
