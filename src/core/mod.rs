pub mod common;
pub mod config;
pub mod geometry;
pub mod harness;
pub mod indexing;
pub use self::config::Config;
