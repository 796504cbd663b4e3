pub mod config;
pub mod engine;
pub mod error;
pub mod shared;
pub mod stats;
pub mod types;
