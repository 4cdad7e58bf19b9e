//! 面向展示层的目录接口
//!
//! 展示层只通过这里访问目录：启动时 `initialize`，
//! 检索时 `current_entries`，提交登录表单时 `register_entry`。

use std::collections::BTreeMap;
use std::io;

use uuid::Uuid;

use super::store::{CatalogStore, StoreState};
use crate::entity::Entry;
use crate::error::{CatalogError, Result};
use crate::utils::fs::CatalogPaths;

/// 新登录条目写入的登录编号
///
/// 所有新条目共用同一编号，登录编号因此不唯一。
pub const REGISTER_INDEX: i64 = 100;

#[derive(Debug)]
pub struct CatalogService {
    paths: CatalogPaths,
    store: CatalogStore,
}

impl CatalogService {
    pub fn new(paths: CatalogPaths) -> Self {
        Self {
            paths,
            store: CatalogStore::new(),
        }
    }

    /// 按运行环境解析路径后创建
    ///
    /// 路径无法解析时视为模板不可用。
    pub fn from_environment() -> Result<Self> {
        let paths = CatalogPaths::resolve().map_err(|message| {
            CatalogError::resource_unavailable(
                iro_path::CATALOG_FILE_NAME,
                io::Error::new(io::ErrorKind::NotFound, message),
            )
        })?;
        Ok(Self::new(paths))
    }

    pub fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn state(&self) -> StoreState {
        self.store.state()
    }

    /// 启动时调用一次：必要时从模板生成可写副本，然后加载
    ///
    /// 失败只回报错误，目录保持为空，调用方应照常显示空列表。
    pub fn initialize(&mut self) -> Result<usize> {
        if let Err(e) = CatalogStore::ensure_backed(self.paths.template(), self.paths.writable()) {
            log::error!("初始化目录文件失败: {}", e);
            return Err(e);
        }

        let count = self.store.load(self.paths.writable())?.len();
        Ok(count)
    }

    /// 当前检索条件下的条目
    pub fn current_entries(&self, query: &str) -> Vec<Entry> {
        self.store.filter(query)
    }

    /// 当前检索条件下按登录编号分组的条目
    pub fn grouped_entries(&self, query: &str) -> BTreeMap<i64, Vec<Entry>> {
        self.store.group_by_index(query)
    }

    /// 登录新条目，编号固定为 [`REGISTER_INDEX`]
    pub fn register_entry(&mut self, name: &str, category: &str) -> Result<()> {
        let index = REGISTER_INDEX.to_string();
        self.store
            .append(self.paths.writable(), &index, name, category)?;
        log::info!("已登录条目: {}", name);
        Ok(())
    }

    pub fn find_entry(&self, id: Uuid) -> Option<&Entry> {
        self.store.find(id)
    }
}
