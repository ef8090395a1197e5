// file: src/dictionary/mod.rs
// description: dictionary lookup module exports
// reference: internal module structure

pub mod client;

pub use client::{DictionaryClient, WordInfo};
