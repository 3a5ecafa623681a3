// src/services/mod.rs

pub mod llm;
pub mod prompt;
pub mod wiki;
