pub mod codec;
pub mod service;
pub mod store;

// 重新导出常用类型方便使用
pub use service::{CatalogService, REGISTER_INDEX};
pub use store::{CatalogStore, StoreState};
