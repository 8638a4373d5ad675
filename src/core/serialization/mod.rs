// src/core/serialization/mod.rs

pub mod load;
pub mod save;
