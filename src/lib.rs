pub mod catalog;
pub mod entity;
pub mod error;
pub mod shell;
pub mod utils;

#[cfg(feature = "desktop")]
mod desktop;

pub use catalog::{CatalogService, CatalogStore, StoreState, REGISTER_INDEX};
pub use entity::Entry;
pub use error::{CatalogError, RowRejection};
pub use shell::{ActiveView, ShellState};
pub use utils::fs::CatalogPaths;

#[cfg(feature = "desktop")]
pub use desktop::run;
