//! 目录存储错误类型

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 目录存储操作失败的原因
///
/// 两种错误都只回报给调用方，不会导致进程终止。
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 首次运行时无法从模板生成可写副本
    #[error("目录模板不可用 ({}): {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 读取或追加可写目录文件失败
    #[error("目录文件读写失败 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    pub(crate) fn resource_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 出错的文件路径
    pub fn path(&self) -> &Path {
        match self {
            Self::ResourceUnavailable { path, .. } | Self::Io { path, .. } => path,
        }
    }
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

/// 加载时跳过某一行的原因，只写日志，不向外传播
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowRejection {
    #[error("字段数为 {0}，应为 3")]
    FieldCount(usize),
    #[error("登录编号不是整数: {0:?}")]
    InvalidIndex(String),
}
