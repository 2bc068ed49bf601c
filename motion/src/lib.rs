//! Viewport-triggered animation engine for the portfolio page.
//!
//! The engine is host-agnostic: browser timers and intersection observers are
//! plugged in through the [`scheduler::Scheduler`] and [`trigger::Viewport`]
//! traits, and the crate ships deterministic stand-ins for both
//! ([`scheduler::ManualScheduler`], [`trigger::ManualViewport`]) so every
//! behavior can be exercised without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`trigger`] | One-shot visibility trigger and the viewport abstraction |
//! | [`count_up`] | Count-up state machine and its scheduled driver |
//! | [`stat`] | Trigger + count-up pair for one displayed statistic |
//! | [`rotator`] | Reveal and spin rotation variants |
//! | [`display`] | Decorated numeric strings (`"40%"`, `"15+"`) |
//! | [`scheduler`] | Repeating-timer abstraction and virtual clock |
//! | [`config`] | Tunables with reference defaults |
//! | [`consts`] | Shared timing constants |

pub mod config;
pub mod consts;
pub mod count_up;
pub mod display;
pub mod rotator;
pub mod scheduler;
pub mod stat;
pub mod trigger;
