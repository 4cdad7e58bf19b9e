//! 目录存储
//!
//! 持有可写目录文件在内存中的完整副本。所有操作都是同步的，
//! 调用方负责串行化访问（桌面外壳通过 Mutex 保证）。

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::fs::File;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::codec;
use crate::entity::{fold_case, Entry};
use crate::error::{CatalogError, Result};

/// 存储状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreState {
    #[default]
    Uninitialized,
    Ready,
    /// 最近一次读写失败；重新 `load` 成功即可恢复
    Faulted,
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    entries: Vec<Entry>,
    state: StoreState,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    // ==================== 首次运行 ====================

    /// 确保可写目录文件存在
    ///
    /// 文件已存在时什么也不做（返回 `false`），绝不覆盖用户追加的数据。
    /// 否则按字节复制模板（含标题行）并返回 `true`。
    /// 失败时不会留下半成品文件。
    pub fn ensure_backed(template_path: &Path, writable_path: &Path) -> Result<bool> {
        if writable_path.exists() {
            log::debug!("可写目录文件已存在: {}", writable_path.display());
            return Ok(false);
        }

        let bytes = fs::read(template_path)
            .map_err(|e| CatalogError::resource_unavailable(template_path, e))?;

        if let Some(parent) = writable_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CatalogError::resource_unavailable(parent, e))?;
        }

        // create_new：若期间文件已被创建，同样视为已存在
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(writable_path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(CatalogError::resource_unavailable(writable_path, e)),
        };

        if let Err(e) = file.write_all(&bytes).and_then(|_| file.sync_all()) {
            drop(file);
            if let Err(remove_err) = fs::remove_file(writable_path) {
                log::warn!(
                    "清理未写完的目录文件失败 {}: {}",
                    writable_path.display(),
                    remove_err
                );
            }
            return Err(CatalogError::resource_unavailable(writable_path, e));
        }

        log::info!(
            "首次启动，已从模板 {} 创建目录文件: {}",
            template_path.display(),
            writable_path.display()
        );
        Ok(true)
    }

    // ==================== 读取 ====================

    /// 全量重新加载
    ///
    /// 成功时整体替换内存中的集合；失败时集合保持不变。
    pub fn load(&mut self, writable_path: &Path) -> Result<&[Entry]> {
        let text = match fs::read_to_string(writable_path) {
            Ok(text) => text,
            Err(e) => {
                self.state = StoreState::Faulted;
                log::error!("读取目录文件失败 {}: {}", writable_path.display(), e);
                return Err(CatalogError::io(writable_path, e));
            }
        };

        self.entries = codec::parse_document(&text);
        self.state = StoreState::Ready;
        log::info!(
            "已加载 {} 个条目: {}",
            self.entries.len(),
            writable_path.display()
        );
        Ok(&self.entries)
    }

    // ==================== 写入 ====================

    /// 追加一行并重新加载
    ///
    /// 字段原样写入，不做裁剪或转义。成功后重新解析整个文件，
    /// 保证内存视图与磁盘一致。
    pub fn append(
        &mut self,
        writable_path: &Path,
        index: &str,
        name: &str,
        category: &str,
    ) -> Result<()> {
        let row = codec::format_row(index, name, category);

        let written = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(writable_path)
            .and_then(|mut file| {
                // 文件末尾缺少换行时先补一个，避免新行接在上一行后面
                if !ends_with_newline(&mut file)? {
                    file.write_all(&[codec::LINE_TERMINATOR as u8])?;
                }
                file.write_all(row.as_bytes())
            });

        if let Err(e) = written {
            self.state = StoreState::Faulted;
            log::error!("追加目录条目失败 {}: {}", writable_path.display(), e);
            return Err(CatalogError::io(writable_path, e));
        }

        self.load(writable_path)?;
        Ok(())
    }

    // ==================== 查询 ====================

    /// 按名称筛选
    ///
    /// 查询去除首尾空白后为空时返回全部条目；否则返回名称包含查询串
    /// （不区分大小写）的条目，保持原有顺序。
    pub fn filter(&self, query: &str) -> Vec<Entry> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return self.entries.clone();
        }

        let needle = fold_case(trimmed);
        self.entries
            .iter()
            .filter(|entry| entry.name_contains_folded(&needle))
            .cloned()
            .collect()
    }

    /// 对筛选结果按登录编号分组，组内保持文件顺序
    pub fn group_by_index(&self, query: &str) -> BTreeMap<i64, Vec<Entry>> {
        let mut groups: BTreeMap<i64, Vec<Entry>> = BTreeMap::new();
        for entry in self.filter(query) {
            groups.entry(entry.index).or_default().push(entry);
        }
        groups
    }
}

/// 空文件视为以换行结尾
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == codec::LINE_TERMINATOR as u8)
}
