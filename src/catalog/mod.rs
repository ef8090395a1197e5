// file: src/catalog/mod.rs
// description: document catalog module exports
// reference: internal module structure

pub mod scanner;

pub use scanner::{DocumentCatalog, PaperRef, Section};
