//! Browser bindings and helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules adapt the motion engine's host traits to the browser
//! (`setInterval`, `IntersectionObserver`) and isolate `web_sys` access so
//! components stay renderable on the server.

pub mod motion_config;
pub mod timer;
pub mod visibility;
