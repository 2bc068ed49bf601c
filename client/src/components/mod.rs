//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `StatCard` and `RotatingProfile` host the motion engine; the rest are
//! static markup fed from `content`.

pub mod rotating_profile;
pub mod stat_card;
pub mod tech_tag;
pub mod testimonial_card;
