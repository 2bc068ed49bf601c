use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<u64>>>, ManualScheduler) {
    (Rc::new(RefCell::new(Vec::new())), ManualScheduler::new())
}

// =============================================================
// step_interval_ms
// =============================================================

#[test]
fn step_interval_zero_target_is_none() {
    assert_eq!(step_interval_ms(1000, 0), None);
}

#[test]
fn step_interval_divides_duration() {
    assert_eq!(step_interval_ms(1000, 40), Some(25));
    assert_eq!(step_interval_ms(1000, 2), Some(500));
}

#[test]
fn step_interval_truncates_fractional_millis() {
    assert_eq!(step_interval_ms(1000, 532), Some(1));
    assert_eq!(step_interval_ms(1000, 15), Some(66));
    assert_eq!(step_interval_ms(1000, 3), Some(333));
}

#[test]
fn step_interval_large_target_ticks_immediately() {
    assert_eq!(step_interval_ms(1000, 5000), Some(0));
    assert_eq!(step_interval_ms(1000, u64::MAX), Some(0));
}

// =============================================================
// ManualScheduler
// =============================================================

#[test]
fn manual_clock_starts_at_zero() {
    let scheduler = ManualScheduler::new();
    assert_eq!(scheduler.now_ms(), 0);
    assert_eq!(scheduler.active_timers(), 0);
}

#[test]
fn repeat_fires_once_per_period() {
    let (log, scheduler) = recorder();
    let log_tick = Rc::clone(&log);
    let clock = scheduler.clone();
    let _timer = scheduler.repeat(10, Box::new(move || log_tick.borrow_mut().push(clock.now_ms())));

    scheduler.advance(9);
    assert!(log.borrow().is_empty());
    scheduler.advance(1);
    assert_eq!(*log.borrow(), vec![10]);
    scheduler.advance(25);
    assert_eq!(*log.borrow(), vec![10, 20, 30]);
    assert_eq!(scheduler.now_ms(), 35);
}

#[test]
fn cancel_stops_future_ticks() {
    let (log, scheduler) = recorder();
    let log_tick = Rc::clone(&log);
    let mut timer = scheduler.repeat(5, Box::new(move || log_tick.borrow_mut().push(0)));

    scheduler.advance(10);
    timer.cancel();
    timer.cancel();
    scheduler.advance(100);
    assert_eq!(log.borrow().len(), 2);
    assert_eq!(scheduler.active_timers(), 0);
}

#[test]
fn dropping_timer_cancels_it() {
    let (log, scheduler) = recorder();
    let log_tick = Rc::clone(&log);
    let timer = scheduler.repeat(5, Box::new(move || log_tick.borrow_mut().push(0)));
    drop(timer);
    scheduler.advance(100);
    assert!(log.borrow().is_empty());
}

#[test]
fn timer_can_cancel_itself_from_its_tick() {
    let (log, scheduler) = recorder();
    let slot: Rc<RefCell<Option<ManualTimer>>> = Rc::new(RefCell::new(None));
    let slot_tick = Rc::clone(&slot);
    let log_tick = Rc::clone(&log);
    let timer = scheduler.repeat(
        10,
        Box::new(move || {
            log_tick.borrow_mut().push(0);
            if log_tick.borrow().len() == 3 {
                if let Some(mut timer) = slot_tick.borrow_mut().take() {
                    timer.cancel();
                }
            }
        }),
    );
    *slot.borrow_mut() = Some(timer);

    scheduler.advance(1000);
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn ties_fire_in_registration_order() {
    let scheduler = ManualScheduler::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&order);
    let second = Rc::clone(&order);
    let _a = scheduler.repeat(10, Box::new(move || first.borrow_mut().push("a")));
    let _b = scheduler.repeat(10, Box::new(move || second.borrow_mut().push("b")));

    scheduler.advance(20);
    assert_eq!(*order.borrow(), vec!["a", "b", "a", "b"]);
}

#[test]
fn independent_timers_keep_their_own_cadence() {
    let scheduler = ManualScheduler::new();
    let fast = Rc::new(RefCell::new(0_u32));
    let slow = Rc::new(RefCell::new(0_u32));
    let fast_tick = Rc::clone(&fast);
    let slow_tick = Rc::clone(&slow);
    let _fast = scheduler.repeat(25, Box::new(move || *fast_tick.borrow_mut() += 1));
    let _slow = scheduler.repeat(500, Box::new(move || *slow_tick.borrow_mut() += 1));

    scheduler.advance(1000);
    assert_eq!(*fast.borrow(), 40);
    assert_eq!(*slow.borrow(), 2);
}

#[test]
fn zero_period_still_advances_time() {
    let (log, scheduler) = recorder();
    let log_tick = Rc::clone(&log);
    let _timer = scheduler.repeat(0, Box::new(move || log_tick.borrow_mut().push(0)));
    scheduler.advance(5);
    assert_eq!(log.borrow().len(), 5);
}
