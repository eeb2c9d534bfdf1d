// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;

mod app;
mod cli;
mod config;
mod output;

fn main() -> Result<()> {
    app::run()
}
