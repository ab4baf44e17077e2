// desclint - core/mod.rs
//
// Core checking logic: catalog loading, sample loading, text
// normalisation, comparison, and tree traversal.

pub mod catalog;
pub mod compare;
pub mod sample;
pub mod text;
pub mod walker;
