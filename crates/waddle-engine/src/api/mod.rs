pub mod composer;
pub mod config;
pub mod types;
