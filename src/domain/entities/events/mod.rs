//! Events Entity Module

pub mod event;

pub use event::{Event, EventStatus};
