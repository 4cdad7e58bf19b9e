//! 目录条目实体
//!
//! 每个条目对应目录文件中的一行：登录编号、名称、场景。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// 进程内唯一标识，仅用于区分列表项，不写入文件
    pub id: Uuid,

    // === 文件列 ===
    /// 登录编号（第一列）。不保证唯一：新登录的条目一律写入 100
    pub index: i64,
    pub name: String,
    /// 场景（第三列）
    pub category: String,
}

impl Entry {
    /// 创建条目并分配新的标识
    pub fn new(index: i64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            index,
            name: name.into(),
            category: category.into(),
        }
    }

    /// 按名称匹配（不区分大小写），`needle` 需已经过 [`fold_case`]
    pub(crate) fn name_contains_folded(&self, needle: &str) -> bool {
        fold_case(&self.name).contains(needle)
    }
}

/// 逐字符折叠大小写，结果与字母在词中的位置无关（`Σ`、`ς` 都折叠为 `σ`）
pub(crate) fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_gets_its_own_id() {
        let a = Entry::new(100, "Teal", "midnight");
        let b = Entry::new(100, "Teal", "midnight");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn fold_case_is_position_independent() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_eq!(fold_case("Σ"), "σ");
        assert_eq!(fold_case("οδος"), "οδοσ");
        assert_eq!(fold_case("Red Sunset"), "red sunset");
    }

    #[test]
    fn serializes_with_flat_field_names() {
        let entry = Entry::new(3, "Gold", "evening");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["index"], 3);
        assert_eq!(value["name"], "Gold");
        assert_eq!(value["category"], "evening");
        assert_eq!(value["id"], entry.id.to_string());
    }
}
