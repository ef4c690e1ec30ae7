// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod item;
pub mod priority;
pub mod sort;

pub use item::Task;
pub use priority::Priority;
pub use sort::SortKey;
