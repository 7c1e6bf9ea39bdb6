//! Command implementations for the giraffe CLI

pub mod export;
pub mod lookup;
pub mod types;
