use super::*;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let make = move |label: &'static str| -> Task {
        let sink = Rc::clone(&sink);
        Box::new(move || sink.borrow_mut().push(label))
    };
    (log, make)
}

#[test]
fn tasks_wait_for_their_delay() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    scheduler.schedule(100, task("a"));

    scheduler.advance(99);
    assert!(log.borrow().is_empty());
    assert_eq!(scheduler.pending(), 1);

    scheduler.advance(1);
    assert_eq!(*log.borrow(), vec!["a"]);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.now_ms(), 100);
}

#[test]
fn tasks_run_in_due_order_then_schedule_order() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    scheduler.schedule(300, task("late"));
    scheduler.schedule(100, task("first"));
    scheduler.schedule(100, task("second"));

    scheduler.advance(1_000);
    assert_eq!(*log.borrow(), vec!["first", "second", "late"]);
    assert_eq!(scheduler.now_ms(), 1_000);
}

#[test]
fn nested_tasks_scheduled_within_window_run_in_same_advance() {
    let scheduler = Rc::new(ManualScheduler::new());
    let hits = Rc::new(Cell::new(0));

    let inner_scheduler = Rc::clone(&scheduler);
    let inner_hits = Rc::clone(&hits);
    scheduler.schedule(
        50,
        Box::new(move || {
            inner_hits.set(inner_hits.get() + 1);
            let again = Rc::clone(&inner_hits);
            inner_scheduler.schedule(50, Box::new(move || again.set(again.get() + 10)));
        }),
    );

    scheduler.advance(100);
    assert_eq!(hits.get(), 11);
}

#[test]
fn nested_task_outside_window_waits() {
    let scheduler = Rc::new(ManualScheduler::new());
    let hits = Rc::new(Cell::new(0));

    let inner_scheduler = Rc::clone(&scheduler);
    let inner_hits = Rc::clone(&hits);
    scheduler.schedule(
        80,
        Box::new(move || {
            let again = Rc::clone(&inner_hits);
            inner_scheduler.schedule(80, Box::new(move || again.set(again.get() + 1)));
        }),
    );

    scheduler.advance(100);
    assert_eq!(hits.get(), 0);
    assert_eq!(scheduler.pending(), 1);
    scheduler.advance(60);
    assert_eq!(hits.get(), 1);
}

#[test]
fn run_until_idle_drains_queue() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    scheduler.schedule(5_000, task("b"));
    scheduler.schedule(10, task("a"));

    scheduler.run_until_idle();
    assert_eq!(*log.borrow(), vec!["a", "b"]);
    assert_eq!(scheduler.now_ms(), 5_000);
}

#[test]
fn rc_scheduler_delegates() {
    let scheduler = ManualScheduler::shared();
    let dyn_scheduler: Rc<dyn Scheduler> = scheduler.clone();
    let (log, task) = recorder();
    dyn_scheduler.schedule(1, task("x"));
    scheduler.advance(1);
    assert_eq!(*log.borrow(), vec!["x"]);
}
