//! Usecase layer: application workflows + events.

pub mod collect;
pub mod event;
pub mod normalize;
pub mod partition;
pub mod report;
pub mod stats;
pub mod validate;
