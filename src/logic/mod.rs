//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - animation: fixed-duration tween sampling and easing
//! - dropdown: anchor computation and ordinal item styling
//! - formatting: display formatting for amounts
//! - layout: hit testing and panel placement constraints

pub mod animation;
pub mod dropdown;
pub mod formatting;
pub mod layout;
