// src/core/mod.rs

pub mod collection;
pub mod console;
pub mod serialization;
