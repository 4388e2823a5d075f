pub mod checklist;
pub mod classifier;
pub mod config;
pub mod error;
pub mod git;
pub mod identity;
pub mod io;
pub mod layout;
pub mod repo;
pub mod validate;

pub use error::{Result, SpecError};
