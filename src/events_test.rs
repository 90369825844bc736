use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn handlers_run_in_registration_order() {
    let mut dispatcher: Dispatcher<EventKind, u32> = Dispatcher::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for label in ["a", "b", "c"] {
        let order = Rc::clone(&order);
        dispatcher.on(EventKind::Scroll, move |_| order.borrow_mut().push(label));
    }

    assert_eq!(dispatcher.dispatch(&EventKind::Scroll, &0), 3);
    assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn dispatch_only_reaches_matching_kind() {
    let mut dispatcher: Dispatcher<EventKind, u32> = Dispatcher::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    dispatcher.on(EventKind::KeyDown, move |code| sink.borrow_mut().push(*code));

    assert_eq!(dispatcher.dispatch(&EventKind::Click, &1), 0);
    assert_eq!(dispatcher.dispatch(&EventKind::KeyDown, &27), 1);
    assert_eq!(*seen.borrow(), vec![27]);
}

#[test]
fn off_removes_single_handler() {
    let mut dispatcher: Dispatcher<EventKind, ()> = Dispatcher::new();
    let first = dispatcher.on(EventKind::Click, |_| {});
    dispatcher.on(EventKind::Click, |_| {});

    assert!(dispatcher.off(first));
    assert!(!dispatcher.off(first));
    assert_eq!(dispatcher.handler_count(&EventKind::Click), 1);
}

#[test]
fn kinds_lists_only_populated_entries() {
    let mut dispatcher: Dispatcher<EventKind, ()> = Dispatcher::new();
    let id = dispatcher.on(EventKind::Load, |_| {});
    dispatcher.on(EventKind::Scroll, |_| {});
    dispatcher.off(id);

    let kinds = dispatcher.kinds().copied().collect::<Vec<_>>();
    assert_eq!(kinds, vec![EventKind::Scroll]);
}

#[test]
fn handlers_may_keep_state() {
    let mut dispatcher: Dispatcher<&'static str, i32> = Dispatcher::new();
    let total = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&total);
    let mut calls = 0;
    dispatcher.on("add", move |v| {
        calls += 1;
        *sink.borrow_mut() += v * calls;
    });
    dispatcher.dispatch(&"add", &10);
    dispatcher.dispatch(&"add", &10);
    assert_eq!(*total.borrow(), 30);
}
