use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ==================== 路径相关常量（重导出） ====================

pub use iro_path::{CATALOG_DATA_DIR, CATALOG_FILE_NAME, RESOURCE_DIR};

// ==================== 目录文件路径配置 ====================

/// 目录文件的两个位置：随包分发的只读模板与用户可写副本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPaths {
    pub template_path: PathBuf,
    pub writable_path: PathBuf,
}

impl CatalogPaths {
    /// 显式指定路径（嵌入或测试时使用）
    pub fn new(template_path: impl Into<PathBuf>, writable_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            writable_path: writable_path.into(),
        }
    }

    /// 按运行环境解析默认路径
    ///
    /// - 模板：程序目录/resources/data.csv
    /// - 可写副本：便携模式下为 程序目录/resources/data/data.csv，
    ///   否则为 系统数据目录/data/data.csv
    pub fn resolve() -> Result<Self, String> {
        let template_path = iro_path::get_template_path()?;
        let writable_path = iro_path::get_catalog_path()?;

        let mode = if iro_path::is_portable_mode() {
            "便携"
        } else {
            "标准"
        };
        log::info!("使用{}模式目录文件: {}", mode, writable_path.display());

        Ok(Self {
            template_path,
            writable_path,
        })
    }

    pub fn template(&self) -> &Path {
        &self.template_path
    }

    pub fn writable(&self) -> &Path {
        &self.writable_path
    }
}
