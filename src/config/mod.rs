// src/config/mod.rs

pub mod polystack_config;

// Re-export main types for convenience
pub use polystack_config::PolystackConfig;
