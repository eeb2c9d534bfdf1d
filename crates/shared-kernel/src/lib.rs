// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, ApplicationResult, DomainError, DomainResult, ErrorContext,
    ExposureRollupError, InfraResult, InfrastructureError, PresentationError, PresentationResult,
    Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Amount, Rating, SENTINEL_LABEL};
