// crates/shared-kernel/src/value_objects/mod.rs
pub mod measures;

pub use measures::{Amount, Rating, SENTINEL_LABEL};
