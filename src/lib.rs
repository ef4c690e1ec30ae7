pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

#[cfg(feature = "menu")]
pub mod menu;

#[cfg(feature = "gui")]
pub mod gui;

pub use error::StoreError;
pub use model::{Priority, SortKey, Task};
pub use store::TaskStore;
