//! Controller layer: UI events, transient notices, and form action dispatch.

pub mod events;
pub mod notices;
pub mod orchestration;
