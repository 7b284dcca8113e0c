use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Counts how many times it has been dropped, standing in for a mount whose
/// drop unregisters its listeners.
struct Listener(Rc<Cell<usize>>);

impl Drop for Listener {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn retained_value_lives_until_owner_cleanup() {
    let dropped = Rc::new(Cell::new(0));
    let owner = Owner::new();
    owner.with(|| {
        let slot = retain_until_cleanup::<Listener>();
        slot.set_value(Some(Listener(Rc::clone(&dropped))));
    });
    assert_eq!(dropped.get(), 0);

    owner.cleanup();
    assert_eq!(dropped.get(), 1);
}

#[test]
fn remount_releases_previous_listeners() {
    // Two mounts in a row under the same owner: only one may stay alive.
    let dropped = Rc::new(Cell::new(0));
    let owner = Owner::new();
    owner.with(|| {
        let slot = retain_until_cleanup::<Listener>();
        slot.set_value(Some(Listener(Rc::clone(&dropped))));
        slot.set_value(Some(Listener(Rc::clone(&dropped))));
    });
    assert_eq!(dropped.get(), 1);

    owner.cleanup();
    assert_eq!(dropped.get(), 2);
}

#[test]
fn each_component_instance_releases_its_own_mount() {
    let first_dropped = Rc::new(Cell::new(0));
    let second_dropped = Rc::new(Cell::new(0));
    let first = Owner::new();
    let second = Owner::new();
    first.with(|| {
        retain_until_cleanup::<Listener>().set_value(Some(Listener(Rc::clone(&first_dropped))));
    });
    second.with(|| {
        retain_until_cleanup::<Listener>().set_value(Some(Listener(Rc::clone(&second_dropped))));
    });

    first.cleanup();
    assert_eq!(first_dropped.get(), 1);
    assert_eq!(second_dropped.get(), 0);
}
