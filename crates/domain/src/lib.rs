#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod join;
pub mod model;
pub mod options;
