#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;
use std::rc::Rc;

use motion::count_up::{CountUp, CountUpPhase};
use motion::stat::StatCounter;
use motion::trigger::TriggerPhase;

use super::*;
use crate::util::timer::BrowserScheduler;

#[test]
fn server_viewport_never_attaches() {
    let viewport = IntersectionViewport::detached();
    assert!(viewport.watch(0.5, Box::new(|_| {})).is_none());
}

#[test]
fn server_rendered_stat_holds_initial_frame() {
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    let stat = StatCounter::mount(
        &IntersectionViewport::detached(),
        BrowserScheduler,
        0.5,
        CountUp::from_text("40%"),
        move |frame| sink.borrow_mut().push(frame),
    );

    assert_eq!(*frames.borrow(), vec!["0%"]);
    assert_eq!(stat.trigger_phase(), TriggerPhase::Watching);
    assert_eq!(stat.count_up_phase(), CountUpPhase::Idle);
    stat.unmount();
    assert_eq!(stat.trigger_phase(), TriggerPhase::Detached);
}
