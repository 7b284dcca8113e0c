use std::cell::RefCell;
use std::rc::Rc;

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
fn task_does_not_run_before_deadline() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let _handle = scheduler.schedule(600, task("reset"));
    scheduler.advance(599);
    assert!(log.borrow().is_empty());
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn task_runs_at_deadline() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let _handle = scheduler.schedule(600, task("reset"));
    scheduler.advance(600);
    assert_eq!(*log.borrow(), vec!["reset"]);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.now_ms(), 600);
}

#[test]
fn tasks_run_in_deadline_order() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let _late = scheduler.schedule(300, task("late"));
    let _early = scheduler.schedule(100, task("early"));
    let _tie = scheduler.schedule(100, task("tie"));
    scheduler.advance(1_000);
    assert_eq!(*log.borrow(), vec!["early", "tie", "late"]);
}

#[test]
fn cancelled_task_never_runs() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let handle = scheduler.schedule(600, task("reset"));
    handle.cancel();
    scheduler.advance(1_000);
    assert!(log.borrow().is_empty());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn cancel_after_run_is_noop() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let handle = scheduler.schedule(10, task("first"));
    scheduler.advance(10);
    let _other = scheduler.schedule(10, task("second"));
    handle.cancel();
    scheduler.advance(10);
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn delay_is_relative_to_current_time() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    scheduler.advance(250);
    let _handle = scheduler.schedule(600, task("reset"));
    scheduler.advance(599);
    assert!(log.borrow().is_empty());
    scheduler.advance(1);
    assert_eq!(*log.borrow(), vec!["reset"]);
    assert_eq!(scheduler.now_ms(), 850);
}
