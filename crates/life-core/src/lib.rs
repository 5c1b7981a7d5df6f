//! Core types and utilities shared by the Game-of-Life engine, its browser bindings
//! and the headless runner.

pub mod types;
pub mod config;
pub mod error;

pub use error::{Error, Result};
pub use types::*;
pub use config::*;
