//! Always-visible title lines: chapter name, verse range and reciter in both languages.

/// Chapter and reciter name lookup tables.
pub mod catalog;
/// Title line formatting.
pub mod header;
